use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

mod config;
mod error;
mod models;
mod parsers;
mod pipeline;
mod render;
mod scrapers;
mod utils;

use crate::config::Config;
use crate::scrapers::{isolate_listings, search_url, FileSource, HttpSource, ListingSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
}

#[derive(Debug, Parser)]
#[command(name = "search-remix")]
#[command(about = "Rebuild a product search results page as clean, ranked product cards")]
struct Cli {
    /// Saved search results page
    #[arg(long, conflicts_with = "query", required_unless_present = "query")]
    file: Option<PathBuf>,

    /// Search terms to fetch live results for
    #[arg(long)]
    query: Option<String>,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file, otherwise ./remix.toml if present
    #[arg(long, env = "REMIX_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("search_remix=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;
    let origin = config.origin_url()?;

    let source: Box<dyn ListingSource> = match (&cli.file, &cli.query) {
        (Some(path), _) => Box::new(FileSource::new(path)),
        (None, Some(query)) => {
            let client = utils::http::create_client(&config.user_agent, config.request_timeout_seconds)?;
            let url = search_url(&origin, query)?;
            Box::new(HttpSource::new(client, url, config.max_retries))
        }
        (None, None) => anyhow::bail!("either --file or --query is required"),
    };

    info!("Loading listings from {}", source.describe());
    let html = source.fetch_html().await?;

    let fragments = isolate_listings(&html, &config.selectors)?;
    let records = pipeline::run(&fragments, &origin);

    let rendered = match cli.format {
        OutputFormat::Json => render::to_json(&records)?,
        OutputFormat::Html => render::render_page(&records),
    };

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} products to {}", records.len(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
