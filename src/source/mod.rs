mod http;

pub use http::HttpRecipeSource;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::Recipe;

/// Supplier of the recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the full catalog, in the order the source serves it
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>, FetchError>;
}
