use url::Url;

/// Delivery estimate is kept as literal text, no date parsing
pub fn parse_delivery_estimate(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Resolve an image or link reference against the document origin
pub fn resolve_url(reference: &str, origin: &Url) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    origin.join(reference).ok().map(|url| url.to_string())
}
