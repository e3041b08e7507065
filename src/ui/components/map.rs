//! The map canvas: a world outline, price badges and cluster counts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders};

use crate::map::{MapView, Pin};
use crate::theme::Theme;

/// Inner area the pins are laid out in, for a given outer map area.
#[must_use]
pub fn canvas_area(area: Rect) -> Rect {
    map_block().inner(area)
}

fn map_block() -> Block<'static> {
    Block::default().borders(Borders::TOP)
}

pub fn render_map(frame: &mut Frame, area: Rect, map: &MapView, theme: &Theme) {
    let inner = canvas_area(area);
    let region = map.region();
    let selected = map.selected();
    let badges: Vec<(f64, f64, Span<'static>)> = map
        .pins(inner.width, inner.height)
        .into_iter()
        .enumerate()
        .map(|(index, pin)| {
            let coordinate = pin.coordinate();
            let style = if selected == Some(index) {
                theme.selected_pin_style()
            } else if matches!(pin, Pin::Cluster(_)) {
                theme.cluster_style()
            } else {
                theme.badge_style()
            };
            let text = match &pin {
                Pin::Marker(_) => format!(" {} ", pin.label()),
                Pin::Cluster(_) => format!("({})", pin.label()),
            };
            (coordinate.longitude, coordinate.latitude, Span::styled(text, style))
        })
        .collect();

    let coastline = theme.coastline;
    let title = format!(" {:.2}, {:.2} ", region.latitude, region.longitude);
    let canvas = Canvas::default()
        .block(map_block().title(Span::styled(title, theme.muted_style())))
        .marker(Marker::Braille)
        .x_bounds(region.x_bounds())
        .y_bounds(region.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: coastline,
            });
            ctx.layer();
            for (x, y, badge) in &badges {
                ctx.print(*x, *y, badge.clone());
            }
        });
    frame.render_widget(canvas, area);
}
