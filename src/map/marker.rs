use log::warn;

use crate::listings::{Coordinate, Listing, ListingId};

/// Formats prices for badges and list rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub symbol: String,
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// `"$ 50"` for whole amounts, `"$ 49.50"` otherwise.
    #[must_use]
    pub fn format(&self, price: f64) -> String {
        if price.fract() == 0.0 && price.abs() < 1e15 {
            format!("{} {}", self.symbol, price as i64)
        } else {
            format!("{} {:.2}", self.symbol, price)
        }
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

/// A listing that can be drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: ListingId,
    pub coordinate: Coordinate,
    pub price: f64,
    pub label: String,
}

/// Keep only listings with a mappable coordinate and a numeric price.
///
/// Every dropped listing is logged; the list view is unaffected.
pub fn markers_for(listings: &[Listing], format: &PriceFormat) -> Vec<MapMarker> {
    listings
        .iter()
        .enumerate()
        .filter_map(|(index, listing)| {
            let coordinate = listing.coordinate();
            let price = listing.price.filter(|price| price.is_finite());
            match (coordinate, price) {
                (Some(coordinate), Some(price)) => Some(MapMarker {
                    id: listing.id.clone(),
                    coordinate,
                    price,
                    label: format.format(price),
                }),
                (coordinate, price) => {
                    let mut missing = Vec::new();
                    if coordinate.is_none() {
                        missing.push("coordinates");
                    }
                    if price.is_none() {
                        missing.push("price");
                    }
                    warn!(
                        "listing at index {index} ({}) is missing required properties: {}",
                        listing.id,
                        missing.join(", ")
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmappable_listings_are_left_off_the_map() {
        let listings = vec![
            Listing::new(1u64, "Ranger", "SUV")
                .with_price(50.0)
                .with_position(37.3, -122.0),
            Listing::new(2u64, "Corolla", "Sedan").with_price(40.0),
        ];
        let markers = markers_for(&listings, &PriceFormat::default());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id.as_str(), "1");
        assert_eq!(markers[0].label, "$ 50");
    }

    #[test]
    fn unpriced_listings_are_left_off_the_map() {
        let listings = vec![Listing::new(3u64, "Mystery", "SUV").with_position(10.0, 10.0)];
        assert!(markers_for(&listings, &PriceFormat::default()).is_empty());
    }

    #[test]
    fn prices_keep_cents_only_when_present() {
        let euro = PriceFormat::new("€");
        assert_eq!(euro.format(120.0), "€ 120");
        assert_eq!(euro.format(49.5), "€ 49.50");
    }

    #[test]
    fn marker_order_follows_the_snapshot() {
        let listings = vec![
            Listing::new(5u64, "A", "SUV").with_price(1.0).with_position(1.0, 1.0),
            Listing::new(4u64, "B", "SUV").with_price(2.0).with_position(2.0, 2.0),
        ];
        let ids: Vec<_> = markers_for(&listings, &PriceFormat::default())
            .into_iter()
            .map(|marker| marker.id)
            .collect();
        assert_eq!(ids, vec![ListingId::from(5u64), ListingId::from(4u64)]);
    }
}
