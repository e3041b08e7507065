use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0)),
    accent: Style::new().fg(Color::Rgb(0, 102, 153)),
    muted: Style::new().fg(Color::Rgb(100, 100, 100)),
    error: Style::new().fg(Color::Rgb(185, 28, 28)),
    badge: Style::new()
        .fg(Color::Rgb(255, 255, 255))
        .bg(Color::Rgb(15, 23, 42)),
    cluster: Style::new()
        .fg(Color::Rgb(255, 255, 255))
        .bg(Color::Rgb(0, 102, 153))
        .add_modifier(Modifier::BOLD),
    selected_pin: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    coastline: Color::Rgb(148, 163, 184),
};
