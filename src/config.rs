use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::error::RemixError;

const DEFAULT_CONFIG_FILE: &str = "remix";
const ENV_PREFIX: &str = "REMIX";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the results document, used to absolutize relative links
    pub origin: String,
    pub user_agent: String,
    pub max_retries: u32,
    pub request_timeout_seconds: u64,
    pub selectors: ListingSelectors,
}

/// CSS selectors locating each listing and its fragments.
///
/// The defaults are repeated in `src/bin/probe_selectors.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub container: String,
    pub identity_attr: String,
    pub title: String,
    pub review_score: String,
    pub rating_count: String,
    pub purchased: String,
    pub price: String,
    pub delivery: String,
    pub image: String,
    pub product_link: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "https://www.amazon.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string(),
            max_retries: 3,
            request_timeout_seconds: 25,
            selectors: ListingSelectors::default(),
        }
    }
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            container: r#"[data-component-type="s-search-result"]"#.to_string(),
            identity_attr: "data-asin".to_string(),
            title: "h2 a span".to_string(),
            review_score: r#"[aria-label*="out of 5 stars"]"#.to_string(),
            rating_count: r#"[data-cy="reviews-block"] [aria-label*="ratings"]"#.to_string(),
            purchased: r#"[data-cy="reviews-block"] .a-size-base.a-color-secondary"#.to_string(),
            price: ".a-price .a-offscreen".to_string(),
            delivery: r#"[data-cy="delivery-recipe"] .a-text-bold"#.to_string(),
            image: ".s-image".to_string(),
            product_link: r#"[data-cy="title-recipe"] a.a-link-normal"#.to_string(),
        }
    }
}

impl Config {
    /// Layer built-in defaults, an optional config file and `REMIX_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, RemixError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn origin_url(&self) -> Result<Url, RemixError> {
        Url::parse(&self.origin).map_err(|source| RemixError::InvalidOrigin {
            origin: self.origin.clone(),
            source,
        })
    }
}
