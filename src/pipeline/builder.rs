use std::collections::HashSet;
use tracing::debug;
use url::Url;

use crate::models::{ListingFragment, ProductId, ProductRecord};
use crate::parsers::{
    non_blank, parse_delivery_estimate, parse_price, parse_purchased_count, parse_rating_count,
    parse_review_score, resolve_url, segment_title,
};

/// Assembles records for one run, keeping the first listing of each identity.
pub struct RecordBuilder {
    origin: Url,
    seen: HashSet<ProductId>,
    records: Vec<ProductRecord>,
}

impl RecordBuilder {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            seen: HashSet::new(),
            records: Vec::new(),
        }
    }

    /// Add one listing. Returns false when it was skipped.
    pub fn push(&mut self, fragment: &ListingFragment) -> bool {
        let Some(id) = fragment
            .identity
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ProductId(id.to_string()))
        else {
            debug!("Skipping listing without identity: {:?}", fragment.title);
            return false;
        };

        if !self.seen.insert(id.clone()) {
            debug!("Skipping duplicate listing {}", id);
            return false;
        }

        self.records.push(build_record(id, fragment, &self.origin));
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen document order
    pub fn finish(self) -> Vec<ProductRecord> {
        self.records
    }
}

/// Run every field parser and the title segmenter over one listing
pub fn build_record(id: ProductId, fragment: &ListingFragment, origin: &Url) -> ProductRecord {
    let raw_name = non_blank(fragment.title.as_deref()).unwrap_or_default();
    let segments = segment_title(&raw_name);

    ProductRecord {
        id,
        base_name: segments.base_name,
        attributes: segments.attributes,
        review_score: fragment.review_label.as_deref().and_then(parse_review_score),
        num_ratings: fragment.ratings_label.as_deref().and_then(parse_rating_count),
        num_purchased: fragment.purchased_text.as_deref().and_then(parse_purchased_count),
        price: fragment.price_text.as_deref().and_then(parse_price),
        delivery_date: fragment.delivery_text.as_deref().and_then(parse_delivery_estimate),
        image_url: fragment.image_ref.as_deref().and_then(|r| resolve_url(r, origin)),
        product_url: fragment.link_ref.as_deref().and_then(|r| resolve_url(r, origin)),
        raw_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;
    use pretty_assertions::assert_eq;

    fn origin() -> Url {
        Url::parse("https://www.amazon.com").unwrap()
    }

    #[test]
    fn builds_full_record() {
        let fragment = ListingFragment {
            identity: Some("B07Q6ZWMLR".to_string()),
            title: Some("JBL Clip 3, Black - Waterproof".to_string()),
            review_label: Some("4.7 out of 5 stars".to_string()),
            ratings_label: Some("54,321 ratings".to_string()),
            purchased_text: Some("10K+ bought in past month".to_string()),
            price_text: Some("$39.95".to_string()),
            delivery_text: Some("Tue, Oct 21".to_string()),
            image_ref: Some("https://m.media-amazon.com/images/I/clip3.jpg".to_string()),
            link_ref: Some("/JBL-Clip-3/dp/B07Q6ZWMLR".to_string()),
        };

        let record = build_record(ProductId("B07Q6ZWMLR".to_string()), &fragment, &origin());

        assert_eq!(
            record,
            ProductRecord {
                id: ProductId("B07Q6ZWMLR".to_string()),
                raw_name: "JBL Clip 3, Black - Waterproof".to_string(),
                base_name: "JBL Clip 3".to_string(),
                attributes: vec!["Black".to_string(), "Waterproof".to_string()],
                review_score: Some(4.7),
                num_ratings: Some(54321),
                num_purchased: Some(10000),
                price: Some(Price { text: "$39.95".to_string(), rounded: Some(40) }),
                delivery_date: Some("Tue, Oct 21".to_string()),
                image_url: Some("https://m.media-amazon.com/images/I/clip3.jpg".to_string()),
                product_url: Some("https://www.amazon.com/JBL-Clip-3/dp/B07Q6ZWMLR".to_string()),
            }
        );
    }

    #[test]
    fn missing_fragments_are_unavailable() {
        let record = build_record(
            ProductId("B0EMPTY001".to_string()),
            &ListingFragment::with_identity("B0EMPTY001"),
            &origin(),
        );

        assert_eq!(record.raw_name, "");
        assert_eq!(record.base_name, "");
        assert!(record.attributes.is_empty());
        assert_eq!(record.review_score, None);
        assert_eq!(record.num_ratings, None);
        assert_eq!(record.num_purchased, None);
        assert_eq!(record.price, None);
        assert_eq!(record.delivery_date, None);
        assert_eq!(record.image_url, None);
        assert_eq!(record.product_url, None);
    }

    #[test]
    fn raw_name_is_trimmed_title_only() {
        let fragment = ListingFragment {
            title: Some("  USB  Cable 3&lt;4 Pack \n".to_string()),
            ..ListingFragment::with_identity("B0LITERAL1")
        };

        let record = build_record(ProductId("B0LITERAL1".to_string()), &fragment, &origin());

        assert_eq!(record.raw_name, "USB  Cable 3&lt;4 Pack");
        assert_eq!(record.base_name, "USB  Cable 3&lt;4 Pack");
    }

    #[test]
    fn first_seen_duplicate_wins() {
        let mut builder = RecordBuilder::new(origin());
        let first = ListingFragment {
            title: Some("First Title".to_string()),
            ..ListingFragment::with_identity("B0DUP00001")
        };
        let second = ListingFragment {
            title: Some("Second Title".to_string()),
            ..ListingFragment::with_identity("B0DUP00001")
        };

        assert!(builder.push(&first));
        assert!(!builder.push(&second));

        let records = builder.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw_name, "First Title");
    }

    #[test]
    fn listing_without_identity_is_skipped() {
        let mut builder = RecordBuilder::new(origin());
        let anonymous = ListingFragment {
            title: Some("Sponsored".to_string()),
            ..Default::default()
        };
        let blank = ListingFragment::with_identity("   ");

        assert!(!builder.push(&anonymous));
        assert!(!builder.push(&blank));
        assert!(builder.is_empty());
    }

    #[test]
    fn preserves_document_order() {
        let mut builder = RecordBuilder::new(origin());
        for id in ["C", "A", "B"] {
            builder.push(&ListingFragment::with_identity(id));
        }
        assert_eq!(builder.len(), 3);

        let ids: Vec<String> = builder.finish().into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }
}
