use async_trait::async_trait;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::error::RemixError;
use crate::scrapers::ListingSource;

/// A results page saved to disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for FileSource {
    async fn fetch_html(&self) -> Result<String> {
        info!("Reading results page from {}", self.path.display());

        let html = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RemixError::ReadPage {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(html)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
