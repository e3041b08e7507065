use std::ops::ControlFlow;

use log::info;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::forms::FormField;
use super::state::ProfileAction;
use crate::auth::Alert;
use crate::explore::SheetPosition;
use crate::map::{LocateOutcome, MapAction};
use crate::navigation::Route;

impl App<'_> {
    /// Handle one key press. `Break` ends the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ControlFlow::Break(());
        }

        if self.alert.is_some() {
            self.handle_alert_key(key);
            return ControlFlow::Continue(());
        }

        let route = self.navigator.current().clone();
        let typing = matches!(
            route,
            Route::SignUp | Route::SignIn | Route::VerifyEmail { .. }
        );

        if !typing && key.code == KeyCode::Char('`') {
            self.show_console = !self.show_console;
            return ControlFlow::Continue(());
        }
        if self.show_console && key.code != KeyCode::Esc && self.console.handle_key(key) {
            return ControlFlow::Continue(());
        }
        if key.code == KeyCode::Esc {
            if self.show_console {
                self.show_console = false;
            } else {
                self.navigator.back();
            }
            return ControlFlow::Continue(());
        }

        match route {
            Route::Explore => return self.handle_explore_key(key),
            Route::ListingDetail(_) => {
                if key.code == KeyCode::Backspace {
                    self.navigator.back();
                }
            }
            Route::SignUp => self.handle_sign_up_key(key),
            Route::SignIn => self.handle_sign_in_key(key),
            Route::VerifyEmail { email } => self.handle_verify_key(key, &email),
            Route::Profile => self.handle_profile_key(key),
        }
        ControlFlow::Continue(())
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        let Some(state) = self.alert.as_mut() else {
            return;
        };
        let count = state.actions().len();
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                state.selected = state.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Tab => {
                state.selected = (state.selected + 1).min(count - 1);
            }
            KeyCode::Esc => {
                self.alert = None;
            }
            KeyCode::Enter => {
                let confirmed = state.confirmed();
                self.alert = None;
                if confirmed {
                    let outcome = self.auth.delete_account();
                    self.apply(outcome);
                }
            }
            _ => {}
        }
    }

    fn handle_explore_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        let expanded = self.screen.sheet().position() == SheetPosition::Expanded;
        let (width, height) = (self.map_area.width, self.map_area.height);
        match key.code {
            KeyCode::Char('q') => return ControlFlow::Break(()),
            KeyCode::Char('[') => {
                self.screen.previous_category();
            }
            KeyCode::Char(']') => {
                self.screen.next_category();
            }
            KeyCode::Char('m') => {
                self.screen.show_map();
            }
            KeyCode::Char('s') => self.screen.drag_sheet(SheetPosition::Expanded),
            KeyCode::Char('r') => self.screen.retry(),
            KeyCode::Char('p') => self.navigate(Route::Profile),
            KeyCode::Char('a') => {
                if !self.auth.is_signed_in() {
                    self.navigate(Route::SignUp);
                }
            }
            KeyCode::Up if expanded => {
                self.screen.list_mut().select_previous();
            }
            KeyCode::Down if expanded => {
                let len = self.screen.listings().len();
                self.screen.list_mut().select_next(len);
            }
            KeyCode::Enter if expanded => {
                if let Some(listing) = self.screen.selected_listing() {
                    self.navigate(Route::ListingDetail(listing.id));
                }
            }
            KeyCode::Up => self.screen.map_mut().pan(0, 1),
            KeyCode::Down => self.screen.map_mut().pan(0, -1),
            KeyCode::Left => self.screen.map_mut().pan(-1, 0),
            KeyCode::Right => self.screen.map_mut().pan(1, 0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.screen.map_mut().zoom_in(),
            KeyCode::Char('-') => self.screen.map_mut().zoom_out(),
            KeyCode::Tab => self.screen.map_mut().select_next(width, height),
            KeyCode::BackTab => self.screen.map_mut().select_previous(width, height),
            KeyCode::Enter => match self.screen.map_mut().activate(width, height) {
                Some(MapAction::OpenListing(id)) => self.navigate(Route::ListingDetail(id)),
                Some(MapAction::Expanded { count }) => {
                    info!("expanded a cluster of {count} listings");
                }
                None => {}
            },
            KeyCode::Char('l') => {
                if let LocateOutcome::Unavailable(message) = self.screen.locate_me() {
                    self.raise(Alert::notice("Location", message));
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::F(2) => {
                self.navigator.back();
                self.navigate(Route::SignIn);
            }
            KeyCode::Tab | KeyCode::Down => self.sign_up_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.sign_up_form.focus_previous(),
            KeyCode::Enter if !self.sign_up_form.on_last_field() => self.sign_up_form.focus_next(),
            KeyCode::Enter => {
                let email = self.sign_up_form.value(FormField::Email);
                let password = self.sign_up_form.value(FormField::Password);
                let outcome = self.auth.sign_up(&email, &password);
                self.apply(outcome);
            }
            _ => {
                self.sign_up_form.input(key);
            }
        }
    }

    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::F(2) => {
                self.navigator.back();
                self.navigate(Route::SignUp);
            }
            KeyCode::Tab | KeyCode::Down => self.sign_in_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.sign_in_form.focus_previous(),
            KeyCode::Enter if !self.sign_in_form.on_last_field() => self.sign_in_form.focus_next(),
            KeyCode::Enter => {
                let email = self.sign_in_form.value(FormField::Email);
                let password = self.sign_in_form.value(FormField::Password);
                let outcome = self.auth.sign_in(&email, &password);
                self.apply(outcome);
            }
            _ => {
                self.sign_in_form.input(key);
            }
        }
    }

    fn handle_verify_key(&mut self, key: KeyEvent, email: &str) {
        match key.code {
            KeyCode::F(5) => {
                let outcome = self.auth.resend_code(email);
                self.apply(outcome);
            }
            KeyCode::Enter => {
                let code = self.verify_form.value(FormField::Code);
                let outcome = self.auth.verify_email(email, &code);
                self.apply(outcome);
            }
            _ => {
                self.verify_form.input(key);
            }
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        let actions = self.profile_actions();
        match key.code {
            KeyCode::Up => {
                self.profile_selection = self.profile_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                self.profile_selection = (self.profile_selection + 1).min(actions.len() - 1);
            }
            KeyCode::Enter => {
                let Some(action) = actions.get(self.profile_selection).copied() else {
                    return;
                };
                match action {
                    ProfileAction::SignUp => self.navigate(Route::SignUp),
                    ProfileAction::LogIn => self.navigate(Route::SignIn),
                    ProfileAction::SignOut => {
                        let outcome = self.auth.sign_out();
                        self.apply(outcome);
                    }
                    ProfileAction::DeleteAccount => {
                        let outcome = self.auth.request_account_deletion();
                        self.apply(outcome);
                    }
                }
            }
            _ => {}
        }
    }
}
