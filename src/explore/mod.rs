//! The explore screen: one category, one listings snapshot, and the map and
//! bottom-sheet list that both render from it.

pub mod list;
pub mod sheet;

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::listings::{Category, Listing, ListingId, ListingsFeed, ListingsState};
use crate::map::{LocateOutcome, LocationProvider, MapView, PriceFormat};

pub use list::{ListContent, ListView};
pub use sheet::{BottomSheet, RefreshCounter, SheetPosition};

pub struct ExploreScreen {
    category: Category,
    categories: Vec<Category>,
    feed: ListingsFeed,
    map: MapView,
    sheet: BottomSheet,
    list: ListView,
    location: Arc<dyn LocationProvider>,
}

impl ExploreScreen {
    /// Start on "All", issue the first fetch and center the map.
    pub fn new(
        feed: ListingsFeed,
        location: Arc<dyn LocationProvider>,
        categories: Vec<Category>,
        price_format: PriceFormat,
    ) -> Self {
        let mut screen = Self {
            category: Category::all(),
            categories,
            feed,
            map: MapView::new(price_format),
            sheet: BottomSheet::new(),
            list: ListView::new(),
            location,
        };
        if !screen.categories.iter().any(Category::is_all) {
            screen.categories.insert(0, Category::all());
        }
        screen.feed.set_category(screen.category.clone());
        screen.map.mount(screen.location.as_ref());
        screen
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Position of the current category in the selector, if it is listed.
    #[must_use]
    pub fn category_index(&self) -> Option<usize> {
        self.categories.iter().position(|c| c == &self.category)
    }

    #[must_use]
    pub fn state(&self) -> &ListingsState {
        self.feed.state()
    }

    #[must_use]
    pub fn listings(&self) -> Arc<[Listing]> {
        self.feed.listings()
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    pub fn sheet(&self) -> &BottomSheet {
        &self.sheet
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    /// Category selector callback. No debouncing: every selection reaches the feed.
    pub fn select_category(&mut self, category: Category) -> bool {
        info!("category selected: {category}");
        self.category = category.clone();
        self.feed.set_category(category)
    }

    pub fn next_category(&mut self) -> bool {
        if self.categories.is_empty() {
            return false;
        }
        let next = match self.category_index() {
            Some(index) => (index + 1) % self.categories.len(),
            None => 0,
        };
        self.select_category(self.categories[next].clone())
    }

    pub fn previous_category(&mut self) -> bool {
        if self.categories.is_empty() {
            return false;
        }
        let len = self.categories.len();
        let previous = match self.category_index() {
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.select_category(self.categories[previous].clone())
    }

    /// Re-query the current category.
    pub fn retry(&mut self) {
        self.feed.refresh();
    }

    /// Apply finished fetches and propagate the sheet's refresh counter.
    ///
    /// Returns `true` when the snapshot changed.
    pub fn pump(&mut self) -> bool {
        let changed = self.feed.pump();
        if changed {
            let listings = self.feed.listings();
            self.map.set_listings(&listings);
            self.list.clamp_selection(listings.len());
        }
        self.list.observe_refresh(self.sheet.refresh());
        changed
    }

    pub fn show_map(&mut self) -> bool {
        let acted = self.sheet.show_map();
        self.list.observe_refresh(self.sheet.refresh());
        acted
    }

    pub fn drag_sheet(&mut self, position: SheetPosition) {
        self.sheet.drag_to(position);
    }

    pub fn locate_me(&mut self) -> LocateOutcome {
        self.map.locate_me(self.location.as_ref())
    }

    /// Listing under the list cursor.
    #[must_use]
    pub fn selected_listing(&self) -> Option<Listing> {
        let listings = self.feed.listings();
        self.list.selected_listing(&listings).cloned()
    }

    /// Find a listing of the current snapshot by id.
    #[must_use]
    pub fn find_listing(&self, id: &ListingId) -> Option<Listing> {
        self.feed
            .listings()
            .iter()
            .find(|listing| &listing.id == id)
            .cloned()
    }

    /// Block until the current fetch settles. Used at startup and by tests.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let settled = self.feed.wait_until_settled(timeout);
        let listings = self.feed.listings();
        self.map.set_listings(&listings);
        self.list.clamp_selection(listings.len());
        settled
    }
}

#[cfg(test)]
mod tests;
