//! Grid clustering of map markers.
//!
//! Markers inside the viewport are projected to terminal cells and bucketed on
//! a fixed grid. A bucket holding one marker stays a marker; anything larger
//! becomes a [`Cluster`] pin. The result depends only on the markers, the
//! region and the viewport size, so the same zoom level always groups the same
//! way.
//!
//! Once the region cannot zoom in any further, a crowded bucket is spread into
//! a ring of individual markers around its center instead, so listings parked
//! at the same spot stay reachable.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::listings::Coordinate;

use super::marker::MapMarker;
use super::region::Region;

/// Bucket size in terminal cells: wide enough for a price badge.
pub const DEFAULT_CELL: (u16, u16) = (10, 3);

/// A region drawn into a `width` x `height` cell area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub region: Region,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    #[must_use]
    pub fn new(region: Region, width: u16, height: u16) -> Self {
        Self {
            region,
            width,
            height,
        }
    }

    /// Cell position (column, row) of a coordinate, or `None` when off-screen.
    #[must_use]
    pub fn project(&self, coordinate: Coordinate) -> Option<(f64, f64)> {
        if self.width == 0 || self.height == 0 || !self.region.contains(coordinate) {
            return None;
        }
        let [west, east] = self.region.x_bounds();
        let [south, north] = self.region.y_bounds();
        let column = (coordinate.longitude - west) / (east - west) * f64::from(self.width);
        let row = (north - coordinate.latitude) / (north - south) * f64::from(self.height);
        Some((
            column.min(f64::from(self.width) - 1.0),
            row.min(f64::from(self.height) - 1.0),
        ))
    }
}

/// Several markers drawn as one pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: String,
    pub center: Coordinate,
    pub members: Vec<MapMarker>,
}

impl Cluster {
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Region to zoom to when the cluster is tapped.
    #[must_use]
    pub fn expansion_region(&self) -> Region {
        let points: Vec<Coordinate> =
            self.members.iter().map(|marker| marker.coordinate).collect();
        Region::fit(&points).unwrap_or_else(|| Region::around(self.center))
    }
}

/// Something drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum Pin {
    Marker(MapMarker),
    Cluster(Cluster),
}

impl Pin {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Pin::Marker(marker) => marker.coordinate,
            Pin::Cluster(cluster) => cluster.center,
        }
    }

    /// Badge text: the price for markers, the member count for clusters.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Pin::Marker(marker) => marker.label.clone(),
            Pin::Cluster(cluster) => cluster.count().to_string(),
        }
    }
}

/// Group visible markers into pins for the given viewport.
pub fn cluster(markers: &[MapMarker], viewport: &Viewport, cell: (u16, u16)) -> Vec<Pin> {
    let cell_width = f64::from(cell.0.max(1));
    let cell_height = f64::from(cell.1.max(1));

    let mut order: Vec<(i64, i64)> = Vec::new();
    let mut buckets: HashMap<(i64, i64), Vec<&MapMarker>> = HashMap::new();
    for marker in markers {
        let Some((column, row)) = viewport.project(marker.coordinate) else {
            continue;
        };
        let key = (
            (column / cell_width).floor() as i64,
            (row / cell_height).floor() as i64,
        );
        let bucket = buckets.entry(key).or_default();
        if bucket.is_empty() {
            order.push(key);
        }
        bucket.push(marker);
    }

    let spread = viewport.region.is_fully_zoomed_in();
    let mut pins = Vec::with_capacity(order.len());
    for key in order {
        let Some(members) = buckets.remove(&key) else {
            continue;
        };
        if let [single] = members.as_slice() {
            pins.push(Pin::Marker((*single).clone()));
            continue;
        }
        let count = members.len() as f64;
        let latitude = members.iter().map(|m| m.coordinate.latitude).sum::<f64>() / count;
        let longitude = members.iter().map(|m| m.coordinate.longitude).sum::<f64>() / count;
        let Some(center) = Coordinate::new(latitude, longitude) else {
            continue;
        };
        if spread {
            pins.extend(spread_around(center, &members, viewport, (cell_width, cell_height)));
        } else {
            pins.push(Pin::Cluster(Cluster {
                id: format!("cluster-{}-{}", key.0, key.1),
                center,
                members: members.into_iter().cloned().collect(),
            }));
        }
    }
    pins
}

/// Lay members out on a ring of at least one bucket radius around `center`.
fn spread_around(
    center: Coordinate,
    members: &[&MapMarker],
    viewport: &Viewport,
    cell: (f64, f64),
) -> Vec<Pin> {
    let degrees_per_column = viewport.region.longitude_delta / f64::from(viewport.width.max(1));
    let degrees_per_row = viewport.region.latitude_delta / f64::from(viewport.height.max(1));
    let rings = 1.0 + (members.len() / 6) as f64;
    let step = TAU / members.len() as f64;

    members
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let angle = step * index as f64;
            let columns = angle.cos() * cell.0 * rings;
            let rows = angle.sin() * cell.1 * rings;
            let coordinate = Coordinate::new(
                center.latitude - rows * degrees_per_row,
                center.longitude + columns * degrees_per_column,
            )
            .unwrap_or(marker.coordinate);
            Pin::Marker(MapMarker {
                coordinate,
                ..(*marker).clone()
            })
        })
        .collect()
}
