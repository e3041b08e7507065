use log::{debug, warn};

use crate::listings::{Listing, ListingId};

use super::cluster::{self, DEFAULT_CELL, Pin, Viewport};
use super::location::{LocationProvider, Permission};
use super::marker::{MapMarker, PriceFormat, markers_for};
use super::region::Region;

/// What a locate-me request did to the map.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    Recentered(Region),
    Denied,
    Unavailable(String),
}

/// What activating the selected pin asks of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    OpenListing(ListingId),
    Expanded { count: usize },
}

/// Map state: the visible region, the markers of the current snapshot and the
/// pin under keyboard focus.
///
/// Pins depend on the area the map is drawn into, so selection helpers take
/// the canvas size of the last frame.
#[derive(Debug, Clone)]
pub struct MapView {
    region: Region,
    markers: Vec<MapMarker>,
    format: PriceFormat,
    selected: Option<usize>,
}

impl MapView {
    pub fn new(format: PriceFormat) -> Self {
        Self {
            region: Region::INITIAL,
            markers: Vec::new(),
            format,
            selected: None,
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    #[must_use]
    pub fn price_format(&self) -> &PriceFormat {
        &self.format
    }

    /// Rebuild markers from a new snapshot.
    pub fn set_listings(&mut self, listings: &[Listing]) {
        self.markers = markers_for(listings, &self.format);
        self.selected = None;
    }

    /// Runs once when the map first appears.
    pub fn mount(&mut self, location: &dyn LocationProvider) -> LocateOutcome {
        self.locate_me(location)
    }

    pub fn locate_me(&mut self, location: &dyn LocationProvider) -> LocateOutcome {
        if location.request_permission() == Permission::Denied {
            warn!("permission to access location was denied");
            return LocateOutcome::Denied;
        }
        match location.current_position() {
            Ok(position) => {
                self.region = Region::around(position.coordinate);
                self.selected = None;
                debug!(
                    "map centered on {:.4}, {:.4}",
                    self.region.latitude, self.region.longitude
                );
                LocateOutcome::Recentered(self.region)
            }
            Err(err) => {
                warn!("{err}");
                LocateOutcome::Unavailable(err.to_string())
            }
        }
    }

    #[must_use]
    pub fn viewport(&self, width: u16, height: u16) -> Viewport {
        Viewport::new(self.region, width, height)
    }

    #[must_use]
    pub fn pins(&self, width: u16, height: u16) -> Vec<Pin> {
        cluster::cluster(&self.markers, &self.viewport(width, height), DEFAULT_CELL)
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select_next(&mut self, width: u16, height: u16) {
        let count = self.pins(width, height).len();
        self.selected = match (count, self.selected) {
            (0, _) => None,
            (count, Some(index)) if index + 1 < count => Some(index + 1),
            _ => Some(0),
        };
    }

    pub fn select_previous(&mut self, width: u16, height: u16) {
        let count = self.pins(width, height).len();
        self.selected = match (count, self.selected) {
            (0, _) => None,
            (count, Some(index)) if index > 0 && index < count => Some(index - 1),
            (count, _) => Some(count - 1),
        };
    }

    /// Tap the selected pin: open a listing or expand a cluster.
    pub fn activate(&mut self, width: u16, height: u16) -> Option<MapAction> {
        let index = self.selected?;
        let pin = self.pins(width, height).into_iter().nth(index)?;
        match pin {
            Pin::Marker(marker) => Some(MapAction::OpenListing(marker.id)),
            Pin::Cluster(group) => {
                let expanded = group.expansion_region();
                if expanded == self.region {
                    self.region.zoom_in();
                } else {
                    self.region = expanded;
                }
                self.selected = None;
                Some(MapAction::Expanded {
                    count: group.count(),
                })
            }
        }
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.region.pan(dx, dy);
        self.selected = None;
    }

    pub fn zoom_in(&mut self) {
        self.region.zoom_in();
        self.selected = None;
    }

    pub fn zoom_out(&mut self) {
        self.region.zoom_out();
        self.selected = None;
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(PriceFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::Coordinate;
    use crate::map::location::{ConfiguredLocation, LocationError, Position};

    struct BrokenGps;

    impl LocationProvider for BrokenGps {
        fn request_permission(&self) -> Permission {
            Permission::Granted
        }

        fn current_position(&self) -> Result<Position, LocationError> {
            Err(LocationError::Unavailable("no fix".into()))
        }
    }

    fn listings() -> Vec<Listing> {
        vec![
            Listing::new(1u64, "Ranger", "SUV")
                .with_price(50.0)
                .with_position(37.3, -122.0),
            Listing::new(2u64, "Corolla", "Sedan").with_price(40.0),
        ]
    }

    #[test]
    fn denied_permission_keeps_the_initial_region() {
        let mut map = MapView::default();
        assert_eq!(map.mount(&ConfiguredLocation::denied()), LocateOutcome::Denied);
        assert_eq!(map.region(), Region::INITIAL);
    }

    #[test]
    fn unavailable_position_keeps_the_region() {
        let mut map = MapView::default();
        assert!(matches!(map.locate_me(&BrokenGps), LocateOutcome::Unavailable(_)));
        assert_eq!(map.region(), Region::INITIAL);
    }

    #[test]
    fn locate_me_centers_on_the_device_and_is_idempotent() {
        let location = ConfiguredLocation::new(Coordinate::new(48.85, 2.35));
        let mut map = MapView::default();
        let first = map.locate_me(&location);
        let second = map.locate_me(&location);
        assert_eq!(first, second);
        assert_eq!(map.region().latitude_delta, Region::LOCATE_DELTA);
        assert_eq!(map.region().latitude, 48.85);
    }

    #[test]
    fn map_only_shows_listings_with_coordinates() {
        let mut map = MapView::default();
        map.set_listings(&listings());
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.pins(90, 30).len(), 1);
    }

    #[test]
    fn activating_a_marker_opens_its_listing() {
        let mut map = MapView::default();
        map.set_listings(&listings());
        assert_eq!(map.activate(90, 30), None);
        map.select_next(90, 30);
        assert_eq!(
            map.activate(90, 30),
            Some(MapAction::OpenListing(ListingId::from(1u64)))
        );
    }

    #[test]
    fn activating_a_cluster_zooms_into_it() {
        let mut map = MapView::default();
        map.set_listings(&[
            Listing::new(1u64, "A", "SUV").with_price(10.0).with_position(37.20, -122.0),
            Listing::new(2u64, "B", "SUV").with_price(12.0).with_position(37.25, -121.9),
        ]);
        map.select_next(90, 30);
        assert_eq!(map.activate(90, 30), Some(MapAction::Expanded { count: 2 }));
        assert!(map.region().latitude_delta < Region::INITIAL.latitude_delta);
        assert_eq!(map.pins(90, 30).len(), 2);
    }

    #[test]
    fn listings_parked_together_can_still_be_opened() {
        let mut map = MapView::default();
        map.set_listings(&[
            Listing::new(1u64, "A", "SUV").with_price(10.0).with_position(37.3, -122.0),
            Listing::new(2u64, "B", "SUV").with_price(12.0).with_position(37.3, -122.0),
        ]);
        map.select_next(90, 30);
        assert_eq!(map.activate(90, 30), Some(MapAction::Expanded { count: 2 }));

        let pins = map.pins(90, 30);
        assert_eq!(pins.len(), 2);
        assert!(pins.iter().all(|pin| matches!(pin, Pin::Marker(_))));

        map.select_next(90, 30);
        map.select_next(90, 30);
        assert_eq!(
            map.activate(90, 30),
            Some(MapAction::OpenListing(ListingId::from(2u64)))
        );
    }

    #[test]
    fn expanding_a_cluster_that_cannot_be_fitted_tighter_zooms_in() {
        let mut map = MapView::default();
        map.set_listings(&[
            Listing::new(1u64, "A", "SUV").with_price(10.0).with_position(37.0, -122.0),
            Listing::new(2u64, "B", "SUV").with_price(12.0).with_position(37.1, -121.9),
        ]);
        map.select_next(4, 2);
        let before = map.region();
        assert_eq!(map.activate(4, 2), Some(MapAction::Expanded { count: 2 }));
        let fitted = map.region();
        assert!(fitted.latitude_delta < before.latitude_delta);

        map.select_next(4, 2);
        assert_eq!(map.activate(4, 2), Some(MapAction::Expanded { count: 2 }));
        assert!(map.region().latitude_delta < fitted.latitude_delta);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut map = MapView::default();
        map.set_listings(&[
            Listing::new(1u64, "A", "SUV").with_price(10.0).with_position(40.0, -125.0),
            Listing::new(2u64, "B", "SUV").with_price(12.0).with_position(34.0, -118.0),
        ]);
        map.select_previous(90, 30);
        assert_eq!(map.selected(), Some(1));
        map.select_next(90, 30);
        assert_eq!(map.selected(), Some(0));
        map.select_next(90, 30);
        map.select_next(90, 30);
        assert_eq!(map.selected(), Some(0));
    }
}
