pub mod details;
pub mod price;
pub mod purchases;
pub mod rating;
pub mod title;

pub use details::*;
pub use price::*;
pub use purchases::*;
pub use rating::*;
pub use title::*;

/// Trim a fragment, treating blank text as absent.
///
/// Inner whitespace and characters are left as scraped; the HTML parser has
/// already decoded entities.
pub fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
