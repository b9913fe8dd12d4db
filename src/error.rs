use thiserror::Error;

/// Errors raised by a [`RecipeSource`](crate::source::RecipeSource) while
/// fetching the catalog
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or transport failure, including client timeouts
    #[error("Failed to fetch catalog: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Catalog request to {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The response body was not a recipe catalog
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Errors surfaced by the `recipe-explorer` binary
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Failed to set up the recipe source
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
