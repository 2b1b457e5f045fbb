use thiserror::Error;

/// Failures of the surrounding shell. Field extraction never fails.
#[derive(Debug, Error)]
pub enum RemixError {
    #[error("invalid CSS selector for {field}: \"{selector}\"")]
    InvalidSelector { field: &'static str, selector: String },

    #[error("invalid origin URL \"{origin}\": {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read results page {path}: {source}")]
    ReadPage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
