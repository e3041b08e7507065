use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::*;
use crate::listings::{
    Coordinate, FetchError, FixtureSource, ListingQuery, ListingRow, ListingSource,
};
use crate::map::{ConfiguredLocation, Region};

const SETTLE: Duration = Duration::from_secs(1);

fn rows() -> Vec<ListingRow> {
    serde_json::from_value(json!([
        {"id": 1, "name": "Ranger", "car_type": "SUV", "price": 50, "latitude": 37.3, "longitude": -122.0},
        {"id": 2, "name": "Corolla", "car_type": "Sedan", "price": 40, "latitude": null, "longitude": null},
    ]))
    .unwrap()
}

fn categories() -> Vec<Category> {
    vec![Category::all(), Category::from("SUV"), Category::from("Sedan")]
}

fn screen_with(source: Arc<dyn ListingSource>) -> ExploreScreen {
    ExploreScreen::new(
        ListingsFeed::new(source),
        Arc::new(ConfiguredLocation::denied()),
        categories(),
        PriceFormat::default(),
    )
}

fn fixture_screen() -> ExploreScreen {
    screen_with(Arc::new(FixtureSource::from_rows(rows())))
}

struct FailingSource;

impl ListingSource for FailingSource {
    fn select(&self, _query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError> {
        Err(FetchError::Network("network error".into()))
    }
}

#[test]
fn starts_on_all_and_fetches_immediately() {
    let mut screen = fixture_screen();
    assert_eq!(screen.category(), &Category::all());
    assert!(screen.state().loading);
    assert!(screen.wait_until_settled(SETTLE));
    assert_eq!(screen.listings().len(), 2);
}

#[test]
fn map_skips_listings_without_coordinates_while_the_list_keeps_them() {
    let mut screen = fixture_screen();
    screen.wait_until_settled(SETTLE);

    assert_eq!(screen.map().markers().len(), 1);
    let ListContent::Rows(rows) = ListContent::from_state(screen.state()) else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 2);
}

#[test]
fn category_change_is_loading_until_the_fetch_resolves() {
    let mut screen = fixture_screen();
    screen.wait_until_settled(SETTLE);

    assert!(screen.select_category(Category::from("SUV")));
    assert!(screen.state().loading);
    assert_eq!(ListContent::from_state(screen.state()), ListContent::Loading);

    screen.wait_until_settled(SETTLE);
    assert!(!screen.state().loading);
    assert_eq!(screen.listings().len(), 1);
    assert_eq!(screen.map().markers().len(), 1);
}

#[test]
fn failed_fetch_shows_the_error_and_empties_the_map() {
    let mut screen = screen_with(Arc::new(FailingSource));
    screen.wait_until_settled(SETTLE);

    let ListContent::Error(message) = ListContent::from_state(screen.state()) else {
        panic!("expected an error");
    };
    assert!(list::error_text(message).contains("network error"));
    assert!(screen.map().markers().is_empty());
    assert!(!screen.state().loading);
}

#[test]
fn show_map_collapses_the_sheet_and_resets_the_list() {
    let mut screen = fixture_screen();
    screen.wait_until_settled(SETTLE);
    screen.list_mut().select_next(2);
    *screen.list_mut().table_state_mut().offset_mut() = 1;

    assert!(screen.show_map());
    assert_eq!(screen.sheet().position(), SheetPosition::Collapsed);
    assert_eq!(screen.sheet().refresh().value(), 1);
    assert_eq!(screen.list().offset(), 0);
    assert_eq!(screen.list().table_state().selected(), Some(0));

    assert!(!screen.show_map());
    assert_eq!(screen.sheet().refresh().value(), 1);
}

#[test]
fn category_selector_cycles_through_the_tags() {
    let mut screen = fixture_screen();
    screen.next_category();
    assert_eq!(screen.category().as_str(), "SUV");
    screen.previous_category();
    screen.previous_category();
    assert_eq!(screen.category().as_str(), "Sedan");
}

#[test]
fn all_is_always_offered() {
    let screen = ExploreScreen::new(
        ListingsFeed::new(Arc::new(FixtureSource::from_rows(rows()))),
        Arc::new(ConfiguredLocation::denied()),
        vec![Category::from("SUV")],
        PriceFormat::default(),
    );
    assert_eq!(screen.categories()[0], Category::all());
    assert_eq!(screen.category_index(), Some(0));
}

#[test]
fn mount_centers_on_the_configured_location() {
    let screen = ExploreScreen::new(
        ListingsFeed::new(Arc::new(FixtureSource::from_rows(rows()))),
        Arc::new(ConfiguredLocation::new(Coordinate::new(40.0, -74.0))),
        categories(),
        PriceFormat::default(),
    );
    assert_eq!(screen.map().region().latitude, 40.0);
    assert_eq!(screen.map().region().latitude_delta, Region::LOCATE_DELTA);

    let denied = fixture_screen();
    assert_eq!(denied.map().region(), Region::INITIAL);
}

#[test]
fn listings_are_found_by_id() {
    let mut screen = fixture_screen();
    screen.wait_until_settled(SETTLE);
    let found = screen.find_listing(&ListingId::from(2u64)).unwrap();
    assert_eq!(found.name, "Corolla");
    assert!(screen.find_listing(&ListingId::from(9u64)).is_none());
    assert_eq!(screen.selected_listing().map(|l| l.name), Some("Ranger".to_string()));
}
