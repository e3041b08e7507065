use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::explore::list::{price_text, rating_text};
use crate::listings::Listing;
use crate::map::PriceFormat;
use crate::theme::Theme;

pub const NOT_FOUND_TEXT: &str = "Listing not found";

/// Fields of one listing, or a not-found notice when it left the snapshot.
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    listing: Option<&Listing>,
    format: &PriceFormat,
    theme: &Theme,
) {
    let Some(listing) = listing else {
        frame.render_widget(
            Paragraph::new(NOT_FOUND_TEXT).style(theme.error_style()),
            area,
        );
        return;
    };

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:>10}  "), theme.muted_style()),
            Span::raw(value),
        ])
    };
    let mut lines = vec![
        Line::from(Span::styled(listing.name.clone(), theme.header_style())),
        Line::default(),
        field("Type", listing.category.to_string()),
        field("Price", price_text(listing, format)),
    ];
    let rating = rating_text(listing);
    if !rating.is_empty() {
        lines.push(field("Rating", rating));
    }
    if let Some(coordinate) = listing.coordinate() {
        lines.push(field(
            "Location",
            format!("{:.4}, {:.4}", coordinate.latitude, coordinate.longitude),
        ));
    }
    if let Some(url) = &listing.image_url {
        lines.push(field("Photo", url.clone()));
    }
    lines.push(field("Id", listing.id.to_string()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
