use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::model::{CatalogResponse, Recipe};
use crate::source::RecipeSource;

/// Fetches the catalog from a JSON endpoint over HTTP
pub struct HttpRecipeSource {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpRecipeSource {
    /// Source for `url`; timeout and user agent fall back to [`SourceConfig::default`]
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let defaults = SourceConfig::default();
        let timeout = timeout.unwrap_or(Duration::from_secs(defaults.timeout));
        Self::build(url, timeout, &defaults.user_agent)
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        Self::build(
            &config.url,
            Duration::from_secs(config.timeout),
            &config.user_agent,
        )
    }

    fn build(url: &str, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>, FetchError> {
        debug!("Fetching recipe catalog from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        // Decoded by hand so a bad payload is a `Decode` error rather than a transport one
        let body = response.bytes().await?;
        let catalog: CatalogResponse = serde_json::from_slice(&body)?;
        debug!("Decoded {} recipes", catalog.recipes.len());
        Ok(catalog.recipes)
    }
}
