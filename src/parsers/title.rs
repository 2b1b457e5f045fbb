//! Product title segmentation.
//!
//! Listing titles carry no fixed grammar: "JBL Clip 3, Black - Waterproof,
//! Durable & Portable Bluetooth Speaker - Up to 10 Hours of Play" mixes
//! commas, dashes and free text. Segmentation splits such a title into a
//! base name ("JBL Clip 3") and a list of descriptive attributes using
//! structural cues only:
//!
//! 1. Parenthesized and bracketed asides are lifted out first and split on
//!    commas and the word "and". Their content never re-enters step 2.
//! 2. The remaining text is split by each delimiter of [`DELIMITER_PATTERNS`]
//!    in turn. Every fragment produced so far is re-split by the next
//!    delimiter, so the order of the list decides the outcome.
//! 3. The first fragment is the base name, the others are split on commas
//!    and "and" and appended after the bracket attributes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Delimiters in precedence order. Reordering changes segmentation results.
pub const DELIMITER_PATTERNS: &[&str] = &[
    r"(?i)\s*\bwith\b\s*",
    r"(?i)\s*\bfor\b\s*",
    r"\s* - \s*",
    r"\s*[\x{2013}\x{2014}]\s*",
    r"\s*,\s*",
    r"\s*\|\s*",
];

static DELIMITERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DELIMITER_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid title delimiter regex"))
        .collect()
});

// Non-nested, so "(a [b] c)" pairs "(a [b]" as one span
static BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[(\[]([^)\]]+)[)\]]")
        .expect("Invalid bracket regex")
});

static LIST_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),|\band\b")
        .expect("Invalid list separator regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSegments {
    pub base_name: String,
    /// Accumulation order: bracket attributes, then delimiter attributes.
    /// Callers must not assume any length ordering.
    pub attributes: Vec<String>,
}

/// Split a raw product title into its base name and attributes.
///
/// Total over any input: an empty title, or one made only of bracketed
/// content, yields an empty base name.
pub fn segment_title(title: &str) -> TitleSegments {
    let mut attributes = Vec::new();

    for captures in BRACKET_REGEX.captures_iter(title) {
        if let Some(inner) = captures.get(1) {
            attributes.extend(split_list(inner.as_str()));
        }
    }

    let outer = BRACKET_REGEX.replace_all(title, "");
    let mut parts = vec![outer.trim().to_string()];

    for delimiter in DELIMITERS.iter() {
        parts = parts
            .iter()
            .flat_map(|part| delimiter.split(part).map(str::to_string).collect::<Vec<_>>())
            .collect();
    }

    let mut parts = parts.into_iter();
    let base_name = parts.next().unwrap_or_default().trim().to_string();

    for part in parts {
        attributes.extend(split_list(&part));
    }

    TitleSegments {
        base_name,
        attributes: attributes.into_iter().filter_map(clean_attribute).collect(),
    }
}

/// Split on commas and the standalone word "and", dropping empty pieces
fn split_list(text: &str) -> Vec<String> {
    LIST_SEPARATOR_REGEX
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_attribute(attribute: String) -> Option<String> {
    let trimmed = attribute.trim_matches(|c: char| c == ',' || c.is_whitespace());
    // Residue of "..., and X"
    let cleaned = trimmed.strip_prefix("and ").unwrap_or(trimmed);

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
