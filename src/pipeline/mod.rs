//! Listing fragments to ranked product records.

mod builder;
mod ranking;

pub use builder::RecordBuilder;
pub use ranking::rank_by_ratings;

use tracing::{debug, info, warn};
use url::Url;

use crate::models::{ListingFragment, ProductRecord, UNAVAILABLE};

/// Build, deduplicate and rank the records of one results page.
///
/// Each call owns a fresh [`RecordBuilder`], so identities seen in one run
/// never affect another.
pub fn run(fragments: &[ListingFragment], origin: &Url) -> Vec<ProductRecord> {
    let mut builder = RecordBuilder::new(origin.clone());
    for fragment in fragments {
        builder.push(fragment);
    }

    if builder.is_empty() {
        warn!("No product records built from {} listings", fragments.len());
    } else {
        info!(
            "Built {} product records from {} listings",
            builder.len(),
            fragments.len()
        );
    }

    let records = rank_by_ratings(builder.finish());
    log_summary(&records);

    records
}

fn log_summary(records: &[ProductRecord]) {
    for record in records {
        let score = or_unavailable(record.review_score);
        let ratings = or_unavailable(record.num_ratings);
        let purchased = or_unavailable(record.num_purchased);
        debug!(
            "{:<12} {:<40} score={:<4} ratings={:<8} purchased={:<8} price={}",
            record.id,
            record.base_name,
            score,
            ratings,
            purchased,
            record.rounded_price_display(),
        );
    }
}

fn or_unavailable<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(identity: &str, title: &str, ratings: Option<&str>) -> ListingFragment {
        ListingFragment {
            title: Some(title.to_string()),
            ratings_label: ratings.map(str::to_string),
            ..ListingFragment::with_identity(identity)
        }
    }

    #[test]
    fn dedups_then_ranks() {
        let origin = Url::parse("https://www.amazon.com").unwrap();
        let fragments = vec![
            listing("A", "Cable (1m)", Some("120 ratings")),
            listing("B", "Charger - 20W", None),
            listing("A", "Cable duplicate", Some("99,999 ratings")),
            listing("C", "Hub with HDMI", Some("4,500 ratings")),
        ];

        let records = run(&fragments, &origin);
        let ids: Vec<&str> = records.iter().map(|r| r.id.0.as_str()).collect();

        assert_eq!(ids, vec!["C", "A", "B"]);
        assert_eq!(records[1].base_name, "Cable");
        assert_eq!(records[1].num_ratings, Some(120));
    }

    #[test]
    fn summary_fields_fall_back_to_sentinel() {
        assert_eq!(or_unavailable(Some(4.5)), "4.5");
        assert_eq!(or_unavailable(Some(1200u64)), "1200");
        assert_eq!(or_unavailable::<u64>(None), "N/A");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let origin = Url::parse("https://www.amazon.com").unwrap();
        assert!(run(&[], &origin).is_empty());
    }

    #[test]
    fn runs_are_independent() {
        let origin = Url::parse("https://www.amazon.com").unwrap();
        let fragments = vec![listing("A", "Cable", None)];

        assert_eq!(run(&fragments, &origin).len(), 1);
        assert_eq!(run(&fragments, &origin).len(), 1);
    }
}
