use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    accent: Style::new().fg(Color::LightCyan),
    muted: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::LightRed),
    badge: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    cluster: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(56, 189, 248))
        .add_modifier(Modifier::BOLD),
    selected_pin: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    coastline: Color::Rgb(71, 85, 105),
};
