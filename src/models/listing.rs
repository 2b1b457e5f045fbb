use serde::{Deserialize, Serialize};

/// One search result as isolated from the results document.
///
/// Every part is optional: the isolation step records what it found and
/// leaves interpretation to the field parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFragment {
    pub identity: Option<String>,
    pub title: Option<String>,
    /// Accessible label of the star widget, e.g. "4.6 out of 5 stars"
    pub review_label: Option<String>,
    /// Accessible label of the rating counter, e.g. "12,345 ratings"
    pub ratings_label: Option<String>,
    /// Secondary text of the reviews block, e.g. "2K+ bought in past month"
    pub purchased_text: Option<String>,
    /// Offscreen price text, e.g. "$19.99"
    pub price_text: Option<String>,
    pub delivery_text: Option<String>,
    pub image_ref: Option<String>,
    pub link_ref: Option<String>,
}

impl ListingFragment {
    pub fn with_identity(identity: &str) -> Self {
        Self {
            identity: Some(identity.to_string()),
            ..Default::default()
        }
    }
}
