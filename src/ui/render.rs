use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use super::components::account::{sign_in_intro, sign_up_intro, verify_intro};
use super::components::{
    canvas_area, render_alert, render_console, render_detail, render_footer, render_form,
    render_header, render_map, render_profile, render_sheet,
};
use crate::navigation::Route;

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let route = self.navigator.current().clone();
        render_header(
            frame,
            header_area,
            &route,
            self.screen.categories(),
            self.screen.category_index(),
            &self.theme,
        );

        match &route {
            Route::Explore => self.render_explore(frame, body_area),
            Route::ListingDetail(id) => {
                let listing = self.screen.find_listing(id);
                render_detail(
                    frame,
                    body_area,
                    listing.as_ref(),
                    self.screen.map().price_format(),
                    &self.theme,
                );
            }
            Route::SignUp => {
                let intro = sign_up_intro(&self.theme);
                render_form(frame, body_area, &intro, &mut self.sign_up_form, &self.theme);
            }
            Route::SignIn => {
                let intro = sign_in_intro(&self.theme);
                render_form(frame, body_area, &intro, &mut self.sign_in_form, &self.theme);
            }
            Route::VerifyEmail { email } => {
                let intro = verify_intro(email, &self.theme);
                render_form(frame, body_area, &intro, &mut self.verify_form, &self.theme);
            }
            Route::Profile => render_profile(
                frame,
                body_area,
                self.auth.user(),
                self.profile_actions(),
                self.profile_selection,
                &self.theme,
            ),
        }

        render_footer(
            frame,
            footer_area,
            &route,
            self.screen.sheet().position(),
            &self.theme,
        );

        if self.show_console {
            render_console(frame, body_area, &self.console, &self.theme);
        }

        if let Some(alert) = &self.alert {
            render_alert(frame, area, alert, &self.theme);
        }
    }

    /// Map fills the body; the sheet covers its bottom rows.
    fn render_explore(&mut self, frame: &mut Frame, area: Rect) {
        let sheet_height = self.screen.sheet().height_for(area.height);
        let [map_area, sheet_area] = Layout::vertical([
            Constraint::Length(area.height.saturating_sub(sheet_height)),
            Constraint::Length(sheet_height),
        ])
        .areas(area);

        self.map_area = canvas_area(map_area);
        if map_area.height > 0 {
            render_map(frame, map_area, self.screen.map(), &self.theme);
        }
        render_sheet(
            frame,
            sheet_area,
            &mut self.screen,
            &self.theme,
            &self.throbber_state,
        );
    }
}
