use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::state::AlertState;

const ALERT_WIDTH: u16 = 48;

/// Centered popup with the alert's buttons on the last line.
pub fn render_alert(frame: &mut Frame, area: Rect, state: &AlertState, theme: &Theme) {
    let width = ALERT_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let message_rows = state.alert.message.width().div_ceil(inner_width).max(1) as u16;
    let height = (message_rows + 4).min(area.height);

    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(popup);

    let mut buttons = Vec::new();
    for (index, label) in state.actions().iter().enumerate() {
        let style = if index == state.selected {
            theme.row_highlight_style()
        } else {
            theme.muted_style()
        };
        buttons.push(Span::styled(format!(" {label} "), style));
        buttons.push(Span::raw(" "));
    }

    let mut lines: Vec<Line> = vec![Line::from(state.alert.message.clone())];
    lines.push(Line::default());
    lines.push(Line::from(buttons).alignment(Alignment::Right));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(Span::styled(
            format!(" {} ", state.alert.title),
            theme.header_style(),
        ));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
