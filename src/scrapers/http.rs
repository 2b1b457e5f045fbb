use async_trait::async_trait;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::scrapers::ListingSource;
use crate::utils::http::fetch_with_retry;

/// A live results page fetched over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
    max_retries: u32,
}

impl HttpSource {
    pub fn new(client: Client, url: String, max_retries: u32) -> Self {
        Self { client, url, max_retries }
    }
}

/// Build the results page URL for a search query, e.g. `<origin>/s?k=usb+cable`
pub fn search_url(origin: &Url, query: &str) -> Result<String> {
    let encoded = serde_urlencoded::to_string([("k", query)])
        .context("Failed to encode search query")?;
    let mut url = origin.join("/s").context("Failed to build search URL")?;
    url.set_query(Some(&encoded));
    Ok(url.to_string())
}

#[async_trait]
impl ListingSource for HttpSource {
    async fn fetch_html(&self) -> Result<String> {
        info!("Fetching results page {}", self.url);

        let response = fetch_with_retry(&self.client, &self.url, self.max_retries).await?;
        let html = response.text().await?;

        Ok(html)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
