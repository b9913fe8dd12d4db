pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

pub use command::{Command, CommandError};
pub use config::{ExplorerConfig, SourceConfig};
pub use error::{ExplorerError, FetchError};
pub use model::{Recipe, RecipeId};
pub use source::{HttpRecipeSource, RecipeSource};
pub use state::{RecipeBrowserState, ViewMode};

/// Create a browser state whose catalog has been fetched from `url`.
///
/// A failed fetch is logged and leaves the catalog empty, like
/// [`RecipeBrowserState::initialize`]. Only an invalid `url` is an error.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_explorer::FetchError> {
/// let state = recipe_explorer::browse("https://dummyjson.com/recipes").await?;
/// println!("{} recipes", state.catalog().len());
/// # Ok(())
/// # }
/// ```
pub async fn browse(url: &str) -> Result<RecipeBrowserState, FetchError> {
    let source = HttpRecipeSource::new(url, None)?;
    let mut state = RecipeBrowserState::new();
    state.initialize(&source).await;
    Ok(state)
}
