use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::listings::Category;
use crate::navigation::Route;
use crate::theme::Theme;

/// Category tabs for Explore; a title bar for every other route.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    route: &Route,
    categories: &[Category],
    selected: Option<usize>,
    theme: &Theme,
) {
    if *route != Route::Explore {
        render_title(frame, area, route, theme);
        return;
    }

    let [label_area, tabs_area] =
        Layout::horizontal([Constraint::Length(7), Constraint::Fill(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(" Drive ", theme.header_style())),
        label_area,
    );

    let selected = selected.unwrap_or(0);
    let tabs = Tabs::new(build_tab_titles(theme, selected, categories))
        .select(selected)
        .divider("")
        .padding("", " ")
        .highlight_style(theme.tab_highlight_style());
    frame.render_widget(tabs, tabs_area);
}

fn render_title(frame: &mut Frame, area: Rect, route: &Route, theme: &Theme) {
    let mut spans = vec![Span::styled(format!(" {} ", route.title()), theme.header_style())];
    if route.is_modal() {
        spans.push(Span::styled("  Esc to close", theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn build_tab_titles(theme: &Theme, selected: usize, categories: &[Category]) -> Vec<Line<'static>> {
    let active = theme.header_style();
    let inactive = theme.tab_inactive_style();
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let label = format!(" {category} ");
            let style = if index == selected { active } else { inactive };
            Line::from(label).style(style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_titles_follow_the_category_order() {
        let categories = [Category::all(), Category::new("SUV")];
        let titles = build_tab_titles(&Theme::default(), 1, &categories);
        let labels: Vec<String> = titles.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec![" All ", " SUV "]);
        assert_eq!(titles[1].style, Theme::default().header_style());
    }
}
