use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::theme::Theme;

/// Scroll and filter state of the log console.
pub struct ConsoleState {
    widget: TuiWidgetState,
}

impl ConsoleState {
    pub fn new() -> Self {
        let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
        Self { widget }
    }

    pub fn handle_key(&self, key: KeyEvent) -> bool {
        let event = match key.code {
            KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiWidgetEvent::HideKey),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiWidgetEvent::FocusKey),
            KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
            KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
            KeyCode::Up => Some(TuiWidgetEvent::UpKey),
            KeyCode::Down => Some(TuiWidgetEvent::DownKey),
            KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
            KeyCode::Right => Some(TuiWidgetEvent::RightKey),
            KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
            _ => None,
        };

        if let Some(event) = event {
            self.widget.transition(event);
            return true;
        }

        false
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_console(frame: &mut Frame, area: Rect, state: &ConsoleState, theme: &Theme) {
    frame.render_widget(Clear, area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let widget = TuiLoggerSmartWidget::default()
        .title_log("Runtime log")
        .title_target("Targets")
        .highlight_style(theme.row_highlight_style())
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .state(&state.widget);
    frame.render_widget(widget, area);
}
