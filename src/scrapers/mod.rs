use async_trait::async_trait;
use anyhow::Result;

mod file;
mod http;
mod search_page;

pub use file::FileSource;
pub use http::{search_url, HttpSource};
pub use search_page::isolate_listings;

/// Somewhere a search results document can be read from
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_html(&self) -> Result<String>;
    fn describe(&self) -> String;
}
