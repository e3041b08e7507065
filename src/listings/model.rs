use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Stable identifier of a listing as handed out by the table store.
///
/// The store may return either integer or string keys; both are normalised to
/// their string form so the identifier can be used directly as a route
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret a loose JSON value as an identifier.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => Some(Self(number.to_string())),
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Opaque category tag. `"All"` disables filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const ALL: &'static str = "All";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// The equality filter to apply for this category, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        if self.is_all() { None } else { Some(&self.0) }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A geographic point that is safe to project onto the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// A rentable vehicle. Read-only; the store owns its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub image_url: Option<String>,
    pub category: Category,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Review score on the store's 0-100 scale.
    pub rating: Option<f64>,
}

impl Listing {
    /// Convenience constructor used by fixtures and tests.
    pub fn new(id: impl Into<ListingId>, name: impl Into<String>, category: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            category: Category::from(category),
            price: None,
            latitude: None,
            longitude: None,
            rating: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// The mappable position of this listing, if it has one.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?)
    }

    /// Rating out of five stars.
    #[must_use]
    pub fn stars(&self) -> Option<f64> {
        self.rating.map(|score| score / 20.0)
    }
}

/// One row exactly as the table store returns it.
///
/// Every column is kept as a loose JSON value so a single malformed column
/// cannot fail decoding of the whole response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingRow {
    pub id: Value,
    pub name: Value,
    pub medium_url: Value,
    pub car_type: Value,
    pub price: Value,
    pub latitude: Value,
    pub longitude: Value,
    pub review_scores_rating: Value,
}

impl ListingRow {
    /// Category tag of the raw row, used for local filtering.
    #[must_use]
    pub fn car_type(&self) -> Option<&str> {
        self.car_type.as_str()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no usable identifier (id: {0})")]
    MissingId(String),
}

impl TryFrom<ListingRow> for Listing {
    type Error = RowError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let id = ListingId::from_value(&row.id)
            .ok_or_else(|| RowError::MissingId(row.id.to_string()))?;
        Ok(Self {
            id,
            name: text(&row.name).unwrap_or_default(),
            image_url: text(&row.medium_url),
            category: Category::new(text(&row.car_type).unwrap_or_default()),
            price: number(&row.price),
            latitude: number(&row.latitude),
            longitude: number(&row.longitude),
            rating: number(&row.review_scores_rating),
        })
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
