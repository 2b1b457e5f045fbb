use once_cell::sync::Lazy;
use regex::Regex;

static REVIEW_SCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?) out of 5 stars")
        .expect("Invalid review score regex")
});

static GROUPED_INT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:,\d+)*")
        .expect("Invalid grouped integer regex")
});

/// Parse the star score from a label such as "4.6 out of 5 stars"
pub fn parse_review_score(label: &str) -> Option<f64> {
    let captures = REVIEW_SCORE_REGEX.captures(label)?;
    let score = captures.get(1)?.as_str().parse::<f64>().ok()?;

    if (0.0..=5.0).contains(&score) {
        Some(score)
    } else {
        None
    }
}

/// Parse the rating count from a label such as "12,345 ratings"
pub fn parse_rating_count(label: &str) -> Option<u64> {
    let digits = GROUPED_INT_REGEX.find(label)?.as_str().replace(',', "");
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_score_from_star_label() {
        assert_eq!(parse_review_score("4.6 out of 5 stars"), Some(4.6));
        assert_eq!(parse_review_score("Rated 4 out of 5 stars, 120 ratings"), Some(4.0));
    }

    #[test]
    fn review_score_without_phrase_is_unavailable() {
        assert_eq!(parse_review_score("4.6 stars"), None);
        assert_eq!(parse_review_score(""), None);
    }

    #[test]
    fn review_score_out_of_range_is_unavailable() {
        assert_eq!(parse_review_score("7.5 out of 5 stars"), None);
    }

    #[test]
    fn rating_count_strips_group_separators() {
        assert_eq!(parse_rating_count("12,345 ratings"), Some(12345));
        assert_eq!(parse_rating_count("1,234,567 ratings"), Some(1_234_567));
        assert_eq!(parse_rating_count("87 ratings"), Some(87));
    }

    #[test]
    fn rating_count_without_digits_is_unavailable() {
        assert_eq!(parse_rating_count("no ratings yet"), None);
    }
}
