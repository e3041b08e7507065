use super::model::Category;

/// Columns requested for every listing read.
pub const LISTING_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "medium_url",
    "car_type",
    "price",
    "latitude",
    "longitude",
];

/// Column that carries the category tag.
pub const CATEGORY_COLUMN: &str = "car_type";

pub const DEFAULT_TABLE: &str = "listings";

/// A filtered read against the listings table: `select(columns, filter?)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub columns: Vec<&'static str>,
    /// Equality filter on [`CATEGORY_COLUMN`]; `None` reads every row.
    pub category: Option<String>,
}

impl ListingQuery {
    #[must_use]
    pub fn for_category(category: &Category) -> Self {
        Self {
            columns: LISTING_COLUMNS.to_vec(),
            category: category.filter().map(str::to_string),
        }
    }

    /// Query-string pairs in PostgREST syntax.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.join(","))];
        if let Some(category) = &self.category {
            params.push((CATEGORY_COLUMN.to_string(), format!("eq.{category}")));
        }
        params
    }

    /// Whether a row with the given tag satisfies this query's filter.
    #[must_use]
    pub fn matches(&self, car_type: Option<&str>) -> bool {
        match &self.category {
            None => true,
            Some(category) => car_type == Some(category.as_str()),
        }
    }
}
