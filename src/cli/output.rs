use anyhow::Result;
use drive::explore::list::{header_text, row_cells};
use drive::listings::{Category, Listing};
use drive::map::PriceFormat;
use serde_json::json;

/// Print one tab-separated line per listing under a count header.
pub(crate) fn print_plain(category: &Category, listings: &[Listing], format: &PriceFormat) {
    println!("{} ({category})", header_text(listings.len()));
    for line in plain_lines(listings, format) {
        println!("{line}");
    }
}

fn plain_lines(listings: &[Listing], format: &PriceFormat) -> Vec<String> {
    listings
        .iter()
        .map(|listing| {
            let [name, category, rating, price] = row_cells(listing, format);
            let mut line = format!("{}\t{name}\t{category}\t{price}", listing.id);
            if !rating.is_empty() {
                line.push('\t');
                line.push_str(&rating);
            }
            line
        })
        .collect()
}

/// Format the listings of a category as a JSON document.
pub(crate) fn format_listings_json(category: &Category, listings: &[Listing]) -> Result<String> {
    let payload = json!({
        "category": category.as_str(),
        "count": listings.len(),
        "listings": listings,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(category: &Category, listings: &[Listing]) -> Result<()> {
    println!("{}", format_listings_json(category, listings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn listings() -> Vec<Listing> {
        vec![
            Listing::new(1u64, "Ranger", "SUV")
                .with_price(50.0)
                .with_rating(90.0),
            Listing::new(2u64, "Corolla", "Sedan"),
        ]
    }

    #[test]
    fn json_format_includes_every_listing() {
        let json = format_listings_json(&Category::all(), &listings()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["category"], "All");
        assert_eq!(value["count"], 2);
        assert_eq!(value["listings"][0]["name"], "Ranger");
        assert_eq!(value["listings"][1]["price"], Value::Null);
    }

    #[test]
    fn plain_lines_show_price_per_day() {
        let lines = plain_lines(&listings(), &PriceFormat::default());
        assert_eq!(lines[0], "1\tRanger\tSUV\t$ 50 /day\t★ 4.5");
        assert_eq!(lines[1], "2\tCorolla\tSedan\tprice unavailable");
    }
}
