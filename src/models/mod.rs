pub mod listing;
pub mod product;

pub use listing::*;
pub use product::*;

/// Display text for any field whose source fragment was missing or unparsable
pub const UNAVAILABLE: &str = "N/A";
