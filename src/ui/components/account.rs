//! Sign-in, sign-up, verification and profile screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::auth::User;
use crate::theme::Theme;
use crate::ui::forms::AuthForm;
use crate::ui::state::ProfileAction;

pub const WELCOME_TEXT: &str = "Welcome to Drive!";
const BENEFITS: [&str; 3] = [
    "Save your favorite vehicles",
    "Book rentals in a few steps",
    "Keep track of your trips",
];

/// A short intro above an input form.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    intro: &[Line<'_>],
    form: &mut AuthForm<'_>,
    theme: &Theme,
) {
    let [intro_area, form_area, _] = Layout::vertical([
        Constraint::Length(intro.len() as u16 + 1),
        Constraint::Length(form.height()),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(intro.to_vec()).wrap(Wrap { trim: true }),
        intro_area,
    );
    form.render(frame, form_area, theme);
}

#[must_use]
pub fn sign_up_intro(theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "Create an account or log in to continue.",
        theme.muted_style(),
    ))]
}

#[must_use]
pub fn sign_in_intro(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Sign in with your email and password.",
            theme.muted_style(),
        )),
        Line::from(Span::styled(
            "Don't have an account? Press F2 to sign up.",
            theme.muted_style(),
        )),
    ]
}

#[must_use]
pub fn verify_intro(email: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("We sent a verification code to {email}."),
            theme.muted_style(),
        )),
        Line::from(Span::styled(
            "Enter it below to finish creating your account.",
            theme.muted_style(),
        )),
    ]
}

/// Account details when signed in, the welcome view otherwise.
pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    user: Option<&User>,
    actions: &[ProfileAction],
    selected: usize,
    theme: &Theme,
) {
    let mut lines = Vec::new();
    match user {
        Some(user) => {
            lines.push(Line::from(Span::styled(
                user.display_name().to_string(),
                theme.header_style(),
            )));
            if let Some(email) = &user.email {
                lines.push(Line::from(Span::styled(email.clone(), theme.muted_style())));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(WELCOME_TEXT, theme.header_style())));
            lines.push(Line::from(Span::styled(
                "Sign up or log in to unlock:",
                theme.muted_style(),
            )));
            for benefit in BENEFITS {
                lines.push(Line::from(format!("  • {benefit}")));
            }
        }
    }
    lines.push(Line::default());
    for (index, action) in actions.iter().enumerate() {
        let style = if index == selected {
            theme.row_highlight_style()
        } else {
            theme.accent_style()
        };
        lines.push(Line::from(Span::styled(format!(" {} ", action.label()), style)));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
