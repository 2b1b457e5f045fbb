use once_cell::sync::Lazy;
use regex::Regex;
use crate::models::Price;

static NON_NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9.]")
        .expect("Invalid non-numeric regex")
});

// Longest leading decimal, so "19.99.1" reads as 19.99
static LEADING_DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)")
        .expect("Invalid leading decimal regex")
});

/// Build a price from the offscreen price text, keeping the text as shown
pub fn parse_price(price_text: &str) -> Option<Price> {
    let text = price_text.trim();
    if text.is_empty() {
        return None;
    }

    Some(Price {
        text: text.to_string(),
        rounded: round_price(text),
    })
}

/// Round a price label to whole currency units.
///
/// Everything except digits and dots is dropped before parsing, so currency
/// symbols and group separators are ignored. Text without a number yields
/// `None` rather than zero.
pub fn round_price(price_text: &str) -> Option<u64> {
    let numeric = NON_NUMERIC_REGEX.replace_all(price_text, "");
    let number = LEADING_DECIMAL_REGEX.find(&numeric)?.as_str().parse::<f64>().ok()?;
    Some(number.round() as u64)
}
