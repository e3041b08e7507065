//! The bottom sheet: a drag handle, the vehicle count and the listing table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::explore::list::{ListContent, LOADING_TEXT, error_text, header_text, row_cells};
use crate::explore::{ExploreScreen, SheetPosition};
use crate::listings::Listing;
use crate::map::PriceFormat;
use crate::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HANDLE: &str = "━━━━━━";
const HEADERS: [&str; 4] = ["Vehicle", "Type", "Rating", "Price"];

pub fn render_sheet(
    frame: &mut Frame,
    area: Rect,
    screen: &mut ExploreScreen,
    theme: &Theme,
    throbber_state: &ThrobberState,
) {
    frame.render_widget(Clear, area);
    if area.height == 0 || area.width == 0 {
        return;
    }

    let state = screen.state().clone();
    let format = screen.map().price_format().clone();
    let expanded = screen.sheet().position() == SheetPosition::Expanded;

    let [handle_area, title_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(HANDLE)
            .alignment(Alignment::Center)
            .style(theme.muted_style()),
        handle_area,
    );

    match ListContent::from_state(&state) {
        ListContent::Loading => {
            let spinner = Throbber::default()
                .style(theme.muted_style())
                .throbber_style(theme.accent_style());
            let line = Line::from(vec![
                spinner.to_symbol_span(throbber_state),
                Span::styled(LOADING_TEXT, theme.muted_style()),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), title_area);
        }
        ListContent::Error(message) => {
            frame.render_widget(
                Paragraph::new(error_text(message))
                    .alignment(Alignment::Center)
                    .style(theme.error_style()),
                title_area,
            );
        }
        ListContent::Rows(listings) => {
            frame.render_widget(
                Paragraph::new(header_text(listings.len()))
                    .alignment(Alignment::Center)
                    .style(theme.accent_style()),
                title_area,
            );
            if expanded && body_area.height > 0 {
                render_table(
                    frame,
                    body_area,
                    screen.list_mut().table_state_mut(),
                    listings,
                    &format,
                    theme,
                );
            }
        }
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    listings: &[Listing],
    format: &PriceFormat,
    theme: &Theme,
) {
    let header = Row::new(HEADERS.into_iter().map(Cell::from).collect::<Vec<_>>())
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let rows = listings.iter().map(|listing| {
        let [name, category, rating, price] = row_cells(listing, format);
        Row::new(vec![
            Cell::from(name),
            Cell::from(category).style(theme.badge_style()),
            Cell::from(rating),
            Cell::from(price),
        ])
    });

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(20),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::WhenSelected)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
    if header_height >= area.height {
        return;
    }

    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let sep_rect = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: 1,
    };
    let base_style = Style::new().bg(theme.header_bg());
    if width <= 2 {
        let para = Paragraph::new(" ".repeat(width)).style(base_style);
        frame.render_widget(para, sep_rect);
        return;
    }

    let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
    let spans = vec![
        Span::styled(" ", base_style),
        Span::styled("─".repeat(width - 2), middle_style),
        Span::styled(" ", base_style),
    ];
    frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
