pub mod card;
pub mod styles;

pub use card::render_page;

use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use crate::models::ProductRecord;

/// Pill colour for a star score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColor {
    DarkGreen,
    LightGreen,
    Yellow,
    Red,
}

impl RatingColor {
    pub fn class_name(&self) -> &'static str {
        match self {
            RatingColor::DarkGreen => "dark-green",
            RatingColor::LightGreen => "light-green",
            RatingColor::Yellow => "yellow",
            RatingColor::Red => "red",
        }
    }
}

pub fn rating_color(score: f64) -> RatingColor {
    if score >= 4.5 {
        RatingColor::DarkGreen
    } else if score >= 4.2 {
        RatingColor::LightGreen
    } else if score >= 3.9 {
        RatingColor::Yellow
    } else {
        RatingColor::Red
    }
}

/// Abbreviate counts of a thousand or more: 12000 -> "12k", 12500 -> "12.5k".
///
/// The tenth is rounded half up on the exact value. Purchase counts were
/// already rounded once when parsed, so "1.25K bought" comes back as "1.3k".
pub fn condense_number(number: u64) -> String {
    if number < 1000 {
        return number.to_string();
    }

    let tenths = number / 100 + u64::from(number % 100 >= 50);
    let (whole, fraction) = (tenths / 10, tenths % 10);
    if fraction == 0 {
        format!("{}k", whole)
    } else {
        format!("{}.{}k", whole, fraction)
    }
}

/// Shortest attributes first; equal lengths keep accumulation order
pub fn sort_attributes_for_display(attributes: &mut [String]) {
    attributes.sort_by_key(|attribute| attribute.chars().count());
}

pub fn to_json(records: &[ProductRecord]) -> Result<String> {
    let payload = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "count": records.len(),
        "products": records,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_purchased_count, parse_rating_count};
    use pretty_assertions::assert_eq;

    #[test]
    fn rating_color_thresholds() {
        assert_eq!(rating_color(4.8), RatingColor::DarkGreen);
        assert_eq!(rating_color(4.5), RatingColor::DarkGreen);
        assert_eq!(rating_color(4.4), RatingColor::LightGreen);
        assert_eq!(rating_color(4.2), RatingColor::LightGreen);
        assert_eq!(rating_color(3.9), RatingColor::Yellow);
        assert_eq!(rating_color(3.8), RatingColor::Red);
        assert_eq!(rating_color(0.0).class_name(), "red");
    }

    #[test]
    fn condense_small_numbers_stay_plain() {
        assert_eq!(condense_number(0), "0");
        assert_eq!(condense_number(999), "999");
    }

    #[test]
    fn condense_thousands() {
        assert_eq!(condense_number(1000), "1k");
        assert_eq!(condense_number(2500), "2.5k");
        assert_eq!(condense_number(12000), "12k");
        assert_eq!(condense_number(12500), "12.5k");
        assert_eq!(condense_number(12_340), "12.3k");
        assert_eq!(condense_number(1_999_999), "2000k");
    }

    #[test]
    fn condense_largest_counts_without_overflow() {
        assert_eq!(condense_number(u64::MAX), "18446744073709551.6k");
        assert_eq!(condense_number(u64::MAX - 49), "18446744073709551.6k");

        let ratings = parse_rating_count("18446744073709551615 ratings").unwrap();
        assert_eq!(condense_number(ratings), "18446744073709551.6k");

        let purchased = parse_purchased_count("99999999999999999999K+ bought").unwrap();
        assert!(condense_number(purchased).ends_with('k'));
    }

    #[test]
    fn purchase_count_display_rounds_twice() {
        // Parse-time rounding, then display-time rounding of the tenth
        let parsed = parse_purchased_count("1.25K+ bought in past month").unwrap();
        assert_eq!(parsed, 1250);
        assert_eq!(condense_number(parsed), "1.3k");

        let parsed = parse_purchased_count("2.5K+ bought in past month").unwrap();
        assert_eq!(condense_number(parsed), "2.5k");
    }

    #[test]
    fn attributes_sort_shortest_first_stably() {
        let mut attributes: Vec<String> = ["Waterproof", "Black", "USB-C", "Up to 10 Hours"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_attributes_for_display(&mut attributes);
        assert_eq!(attributes, vec!["Black", "USB-C", "Waterproof", "Up to 10 Hours"]);
    }

    #[test]
    fn json_wraps_records() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&[]).unwrap()).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["products"].as_array().unwrap().is_empty());
        assert!(value["generated_at"].is_string());
    }
}
