//! Report how many elements each listing selector matches in a saved results
//! page. Run it when listings stop being picked up to see which selector
//! the markup no longer satisfies.

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::fs;

// Mirrors `ListingSelectors::default()` in src/config.rs; keep both in step.
const LISTING_SELECTORS: &[(&str, &str)] = &[
    ("container", r#"[data-component-type="s-search-result"]"#),
    ("title", "h2 a span"),
    ("review_score", r#"[aria-label*="out of 5 stars"]"#),
    ("rating_count", r#"[data-cy="reviews-block"] [aria-label*="ratings"]"#),
    ("purchased", r#"[data-cy="reviews-block"] .a-size-base.a-color-secondary"#),
    ("price", ".a-price .a-offscreen"),
    ("delivery", r#"[data-cy="delivery-recipe"] .a-text-bold"#),
    ("image", ".s-image"),
    ("product_link", r#"[data-cy="title-recipe"] a.a-link-normal"#),
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: probe_selectors <saved-results-page.html>")?;
    let html = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;

    let document = Html::parse_document(&html);

    for (name, selector_str) in LISTING_SELECTORS {
        let selector = Selector::parse(selector_str)
            .map_err(|_| anyhow::anyhow!("Failed to parse {} selector", name))?;
        let count = document.select(&selector).count();
        println!("{:<14} {:>4}  {}", name, count, selector_str);
    }

    Ok(())
}
