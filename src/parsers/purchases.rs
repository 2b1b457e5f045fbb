use once_cell::sync::Lazy;
use regex::Regex;

static PURCHASE_COUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:,\d{3})*(?:\.\d+)?)([Kk])?\+?")
        .expect("Invalid purchase count regex")
});

/// Parse the recent-purchase count from text such as "2K+ bought in past month".
///
/// Only text mentioning "bought" or "reordered" is considered, the reviews
/// block carries other secondary numbers too. A `K` suffix multiplies by a
/// thousand and the result is rounded to the nearest integer, so "2.5K"
/// yields 2500.
pub fn parse_purchased_count(text: &str) -> Option<u64> {
    if !(text.contains("bought") || text.contains("reordered")) {
        return None;
    }

    let captures = PURCHASE_COUNT_REGEX.captures(text)?;
    let number = captures.get(1)?.as_str().replace(',', "");

    if captures.get(2).is_some() {
        let thousands = number.parse::<f64>().ok()?;
        Some((thousands * 1000.0).round() as u64)
    } else if number.contains('.') {
        number.parse::<f64>().ok().map(|n| n.round() as u64)
    } else {
        number.parse::<u64>().ok()
    }
}
