//! The map half of the explore screen: markers, clustering, the visible region
//! and device location.

pub mod cluster;
pub mod location;
pub mod marker;
pub mod region;
mod view;

pub use cluster::{Cluster, Pin, Viewport};
pub use location::{ConfiguredLocation, LocationError, LocationProvider, Permission, Position};
pub use marker::{MapMarker, PriceFormat, markers_for};
pub use region::Region;
pub use view::{LocateOutcome, MapAction, MapView};
