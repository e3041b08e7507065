use crate::listings::Coordinate;

const MIN_DELTA: f64 = 0.02;
const MAX_LATITUDE_DELTA: f64 = 180.0;
const MAX_LONGITUDE_DELTA: f64 = 360.0;
/// Padding applied around points when fitting a region to them.
const FIT_PADDING: f64 = 1.4;
/// Fraction of the visible span moved per pan step.
const PAN_STEP: f64 = 0.25;

/// The visible part of the map: a center and the span around it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Where the map starts before (or without) a location fix.
    pub const INITIAL: Region = Region {
        latitude: 37.33,
        longitude: -122.0,
        latitude_delta: 9.0,
        longitude_delta: 9.0,
    };

    /// Span used when centering on the device position.
    pub const LOCATE_DELTA: f64 = 7.0;

    #[must_use]
    pub fn around(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            latitude_delta: Self::LOCATE_DELTA,
            longitude_delta: Self::LOCATE_DELTA,
        }
    }

    /// Smallest region containing every point, padded, or `None` for no points.
    #[must_use]
    pub fn fit(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lon, mut max_lon) = (first.longitude, first.longitude);
        for point in &points[1..] {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lon = min_lon.min(point.longitude);
            max_lon = max_lon.max(point.longitude);
        }
        let mut region = Self {
            latitude: (min_lat + max_lat) / 2.0,
            longitude: (min_lon + max_lon) / 2.0,
            latitude_delta: (max_lat - min_lat) * FIT_PADDING,
            longitude_delta: (max_lon - min_lon) * FIT_PADDING,
        };
        region.clamp();
        Some(region)
    }

    pub fn zoom_in(&mut self) {
        self.latitude_delta /= 2.0;
        self.longitude_delta /= 2.0;
        self.clamp();
    }

    pub fn zoom_out(&mut self) {
        self.latitude_delta *= 2.0;
        self.longitude_delta *= 2.0;
        self.clamp();
    }

    /// Move the center by whole steps; positive `dx` is east, positive `dy` north.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.longitude += f64::from(dx) * self.longitude_delta * PAN_STEP;
        self.latitude += f64::from(dy) * self.latitude_delta * PAN_STEP;
        self.clamp();
    }

    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        (west..=east).contains(&coordinate.longitude)
            && (south..=north).contains(&coordinate.latitude)
    }

    /// Whether both spans already sit at the zoom limit.
    #[must_use]
    pub fn is_fully_zoomed_in(&self) -> bool {
        self.latitude_delta <= MIN_DELTA && self.longitude_delta <= MIN_DELTA
    }

    /// West and east edges, as canvas x bounds.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.longitude_delta / 2.0;
        [self.longitude - half, self.longitude + half]
    }

    /// South and north edges, as canvas y bounds.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.latitude_delta / 2.0;
        [self.latitude - half, self.latitude + half]
    }

    fn clamp(&mut self) {
        self.latitude_delta = self.latitude_delta.clamp(MIN_DELTA, MAX_LATITUDE_DELTA);
        self.longitude_delta = self.longitude_delta.clamp(MIN_DELTA, MAX_LONGITUDE_DELTA);
        self.latitude = self.latitude.clamp(-90.0, 90.0);
        self.longitude = self.longitude.clamp(-180.0, 180.0);
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn zoom_halves_and_doubles_the_span() {
        let mut region = Region::INITIAL;
        region.zoom_in();
        assert_eq!(region.latitude_delta, 4.5);
        region.zoom_out();
        region.zoom_out();
        assert_eq!(region.longitude_delta, 18.0);
    }

    #[test]
    fn zoom_is_bounded() {
        let mut region = Region::INITIAL;
        for _ in 0..20 {
            region.zoom_in();
        }
        assert_eq!(region.latitude_delta, MIN_DELTA);
        assert!(region.is_fully_zoomed_in());
        for _ in 0..40 {
            region.zoom_out();
        }
        assert_eq!(region.latitude_delta, MAX_LATITUDE_DELTA);
        assert_eq!(region.longitude_delta, MAX_LONGITUDE_DELTA);
    }

    #[test]
    fn pan_moves_a_quarter_span_per_step() {
        let mut region = Region::INITIAL;
        region.pan(1, -2);
        assert!((region.longitude - (-122.0 + 2.25)).abs() < 1e-9);
        assert!((region.latitude - (37.33 - 4.5)).abs() < 1e-9);
    }

    #[test]
    fn bounds_surround_the_center() {
        let region = Region::around(coordinate(10.0, 20.0));
        assert_eq!(region.x_bounds(), [16.5, 23.5]);
        assert_eq!(region.y_bounds(), [6.5, 13.5]);
        assert!(region.contains(coordinate(12.0, 18.0)));
        assert!(!region.contains(coordinate(14.0, 18.0)));
    }

    #[test]
    fn fit_covers_every_point() {
        let points = [coordinate(37.0, -122.0), coordinate(38.0, -121.0)];
        let region = Region::fit(&points).unwrap();
        assert!(points.iter().all(|point| region.contains(*point)));
        assert_eq!(Region::fit(&[]), None);
    }

    #[test]
    fn fit_of_one_point_uses_the_minimum_span() {
        let region = Region::fit(&[coordinate(1.0, 1.0)]).unwrap();
        assert_eq!(region.latitude_delta, MIN_DELTA);
    }
}
