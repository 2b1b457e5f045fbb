use serde::{Deserialize, Serialize};
use std::fmt;

use super::UNAVAILABLE;

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Listed price: the source text as shown plus a whole-unit value for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub text: String,
    pub rounded: Option<u64>,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub raw_name: String,
    pub base_name: String,
    pub attributes: Vec<String>,
    pub review_score: Option<f64>,
    pub num_ratings: Option<u64>,
    pub num_purchased: Option<u64>,
    pub price: Option<Price>,
    pub delivery_date: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
}

impl ProductRecord {
    pub fn rounded_price(&self) -> Option<u64> {
        self.price.as_ref().and_then(|p| p.rounded)
    }

    /// Rounded price as display text, `N/A` when unknown
    pub fn rounded_price_display(&self) -> String {
        self.rounded_price()
            .map(|p| p.to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    pub fn delivery_display(&self) -> &str {
        self.delivery_date.as_deref().unwrap_or(UNAVAILABLE)
    }
}
