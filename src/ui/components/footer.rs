use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::explore::SheetPosition;
use crate::navigation::Route;
use crate::theme::Theme;

/// Key hints for the current route.
#[must_use]
pub fn hints(route: &Route, sheet: SheetPosition) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::Explore => match sheet {
            SheetPosition::Expanded => &[
                ("[ ]", "category"),
                ("↑↓", "select"),
                ("Enter", "open"),
                ("m", "map"),
                ("r", "retry"),
                ("p", "profile"),
                ("q", "quit"),
            ],
            SheetPosition::Collapsed => &[
                ("[ ]", "category"),
                ("arrows", "pan"),
                ("+/-", "zoom"),
                ("Tab", "pin"),
                ("Enter", "open"),
                ("l", "locate"),
                ("s", "list"),
                ("q", "quit"),
            ],
        },
        Route::ListingDetail(_) => &[("Esc", "back")],
        Route::SignUp => &[
            ("Tab", "next field"),
            ("Enter", "continue"),
            ("F2", "log in instead"),
            ("Esc", "close"),
        ],
        Route::SignIn => &[
            ("Tab", "next field"),
            ("Enter", "sign in"),
            ("F2", "sign up instead"),
            ("Esc", "close"),
        ],
        Route::VerifyEmail { .. } => &[
            ("Enter", "verify"),
            ("F5", "resend code"),
            ("Esc", "back"),
        ],
        Route::Profile => &[("↑↓", "select"), ("Enter", "choose"), ("Esc", "back")],
    }
}

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    route: &Route,
    sheet: SheetPosition,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    for (key, action) in hints(route, sheet) {
        spans.push(Span::styled(format!(" {key} "), theme.accent_style()));
        spans.push(Span::styled(format!("{action} "), theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
