//! Text inputs behind the sign-in, sign-up and verification screens.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::theme::Theme;

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Code,
}

impl FormField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::Code => "Verification code",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormField::Email => "you@example.com",
            FormField::Password => "Password",
            FormField::Code => "Enter the code from your email",
        }
    }

    fn input<'a>(self) -> TextArea<'a> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text(self.placeholder());
        if self == FormField::Password {
            input.set_mask_char(MASK_CHAR);
        }
        input
    }
}

/// A vertical stack of single-line inputs with one focused field.
pub struct AuthForm<'a> {
    fields: Vec<(FormField, TextArea<'a>)>,
    focus: usize,
}

impl AuthForm<'_> {
    /// Email and password, as on the sign-in and sign-up screens.
    #[must_use]
    pub fn credentials() -> Self {
        Self::with_fields(&[FormField::Email, FormField::Password])
    }

    /// The emailed one-time code.
    #[must_use]
    pub fn verification() -> Self {
        Self::with_fields(&[FormField::Code])
    }

    fn with_fields(fields: &[FormField]) -> Self {
        Self {
            fields: fields.iter().map(|field| (*field, field.input())).collect(),
            focus: 0,
        }
    }

    #[must_use]
    pub fn focused(&self) -> FormField {
        self.fields[self.focus].0
    }

    /// Current text of a field; empty when the form has no such field.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, input)| input.lines().join(""))
            .unwrap_or_default()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// `true` when the focused field is the last one, so Enter should submit.
    #[must_use]
    pub fn on_last_field(&self) -> bool {
        self.focus + 1 == self.fields.len()
    }

    /// Forward an editing key to the focused input. Newlines are never inserted.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
            return false;
        }
        self.fields[self.focus].1.input(key)
    }

    pub fn clear(&mut self) {
        for (field, input) in &mut self.fields {
            *input = field.input();
        }
        self.focus = 0;
    }

    /// Rows needed to draw every field with its border.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * 3
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let constraints = vec![Constraint::Length(3); self.fields.len()];
        let rows = Layout::vertical(constraints).split(area);
        for (index, ((field, input), row)) in self.fields.iter_mut().zip(rows.iter()).enumerate() {
            let focused = index == self.focus;
            let border = if focused {
                theme.accent_style()
            } else {
                theme.muted_style()
            };
            input.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(field.label()),
            );
            input.set_cursor_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
            frame.render_widget(&*input, *row);
        }
    }
}
