use ratatui::widgets::TableState;

use crate::listings::{Listing, ListingsState};
use crate::map::PriceFormat;

use super::sheet::RefreshCounter;

pub const LOADING_TEXT: &str = "Loading...";
pub const MISSING_PRICE_TEXT: &str = "price unavailable";

/// What the list shows for a given feed state. Loading wins over an error,
/// an error wins over rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListContent<'a> {
    Loading,
    Error(&'a str),
    Rows(&'a [Listing]),
}

impl<'a> ListContent<'a> {
    #[must_use]
    pub fn from_state(state: &'a ListingsState) -> Self {
        if state.loading {
            ListContent::Loading
        } else if let Some(message) = state.error.as_deref() {
            ListContent::Error(message)
        } else {
            ListContent::Rows(&state.listings)
        }
    }
}

#[must_use]
pub fn header_text(count: usize) -> String {
    format!("{count} vehicles")
}

#[must_use]
pub fn error_text(message: &str) -> String {
    format!("Error: {message}")
}

#[must_use]
pub fn rating_text(listing: &Listing) -> String {
    listing
        .stars()
        .map(|stars| format!("★ {stars:.1}"))
        .unwrap_or_default()
}

#[must_use]
pub fn price_text(listing: &Listing, format: &PriceFormat) -> String {
    match listing.price {
        Some(price) if price.is_finite() => format!("{} /day", format.format(price)),
        _ => MISSING_PRICE_TEXT.to_string(),
    }
}

/// Name, category, rating and price columns for one row.
#[must_use]
pub fn row_cells(listing: &Listing, format: &PriceFormat) -> [String; 4] {
    [
        listing.name.clone(),
        listing.category.to_string(),
        rating_text(listing),
        price_text(listing, format),
    ]
}

/// Scroll and selection of the listing list.
#[derive(Debug, Clone)]
pub struct ListView {
    table_state: TableState,
    seen_refresh: RefreshCounter,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
            seen_refresh: RefreshCounter::default(),
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_state(&self) -> &TableState {
        &self.table_state
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.table_state.offset()
    }

    /// Jump back to the first row when the counter moved since the last call.
    ///
    /// Returns `true` when the list was reset.
    pub fn observe_refresh(&mut self, counter: RefreshCounter) -> bool {
        if counter == self.seen_refresh {
            return false;
        }
        self.seen_refresh = counter;
        self.scroll_to_top();
        true
    }

    pub fn scroll_to_top(&mut self) {
        *self.table_state.offset_mut() = 0;
        self.table_state.select(Some(0));
    }

    /// Keep the selection inside a snapshot of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.table_state.selected() {
            Some(selected) if len > 0 && selected >= len => {
                self.table_state.select(Some(len - 1));
            }
            None if len > 0 => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if let Some(selected) = self.table_state.selected()
            && selected + 1 < len
        {
            self.table_state.select(Some(selected + 1));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    #[must_use]
    pub fn selected_listing<'a>(&self, listings: &'a [Listing]) -> Option<&'a Listing> {
        listings.get(self.table_state.selected()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn state(loading: bool, error: Option<&str>, listings: Vec<Listing>) -> ListingsState {
        ListingsState {
            listings: Arc::from(listings),
            loading,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn loading_wins_over_error_and_rows() {
        let loading = state(true, Some("boom"), vec![Listing::new(1u64, "A", "SUV")]);
        assert_eq!(ListContent::from_state(&loading), ListContent::Loading);

        let failed = state(false, Some("network error"), Vec::new());
        let content = ListContent::from_state(&failed);
        assert_eq!(content, ListContent::Error("network error"));
        assert!(error_text("network error").contains("network error"));

        let loaded = state(false, None, vec![Listing::new(1u64, "A", "SUV")]);
        assert!(matches!(
            ListContent::from_state(&loaded),
            ListContent::Rows(rows) if rows.len() == 1
        ));
    }

    #[test]
    fn refresh_counter_change_resets_the_offset() {
        let mut list = ListView::new();
        *list.table_state_mut().offset_mut() = 12;
        list.table_state_mut().select(Some(15));

        assert!(!list.observe_refresh(RefreshCounter::new(0)));
        assert_eq!(list.offset(), 12);

        assert!(list.observe_refresh(RefreshCounter::new(1)));
        assert_eq!(list.offset(), 0);
        assert_eq!(list.table_state().selected(), Some(0));
    }

    #[test]
    fn any_counter_change_counts() {
        let mut list = ListView::new();
        list.observe_refresh(RefreshCounter::new(5));
        *list.table_state_mut().offset_mut() = 3;
        assert!(list.observe_refresh(RefreshCounter::new(4)));
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn rows_show_rating_and_price_per_day() {
        let format = PriceFormat::default();
        let rated = Listing::new(1u64, "Ranger", "SUV")
            .with_price(50.0)
            .with_rating(90.0);
        assert_eq!(
            row_cells(&rated, &format),
            [
                "Ranger".to_string(),
                "SUV".to_string(),
                "★ 4.5".to_string(),
                "$ 50 /day".to_string()
            ]
        );

        let bare = Listing::new(2u64, "Corolla", "Sedan");
        assert_eq!(rating_text(&bare), "");
        assert_eq!(price_text(&bare, &format), MISSING_PRICE_TEXT);
    }

    #[test]
    fn header_counts_vehicles() {
        assert_eq!(header_text(2), "2 vehicles");
    }

    #[test]
    fn selection_stays_inside_the_snapshot() {
        let listings = vec![Listing::new(1u64, "A", "SUV"), Listing::new(2u64, "B", "SUV")];
        let mut list = ListView::new();
        list.select_next(listings.len());
        list.select_next(listings.len());
        assert_eq!(list.selected_listing(&listings).map(|l| l.name.as_str()), Some("B"));

        list.clamp_selection(1);
        assert_eq!(list.table_state().selected(), Some(0));
        list.select_previous();
        assert_eq!(list.table_state().selected(), Some(0));
    }
}
