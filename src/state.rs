//! Recipe browser state
//!
//! [`RecipeBrowserState`] owns the fetched catalog, the saved collection, the
//! active view and the recipe shown in detail. Every transition is a
//! synchronous `&mut self` method; the only asynchronous step is the one-time
//! catalog fetch, which can be applied later via [`RecipeBrowserState::complete_initialize`]
//! so user transitions keep flowing while it is in flight.

use log::{error, info, warn};

use crate::error::FetchError;
use crate::model::{Recipe, RecipeId};
use crate::source::RecipeSource;

/// Which collection the presentation layer renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The fetched catalog (default)
    #[default]
    Explore,
    /// The saved collection
    Saved,
}

#[derive(Debug, Default)]
pub struct RecipeBrowserState {
    catalog: Vec<Recipe>,
    saved: Vec<Recipe>,
    view: ViewMode,
    selection: Option<Recipe>,
    fetch_issued: bool,
}

impl RecipeBrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog from `source` and apply the outcome.
    ///
    /// Only the first call reaches the source. A failed fetch is logged and
    /// absorbed: the catalog keeps its previous contents and nothing is returned
    /// to the caller.
    pub async fn initialize(&mut self, source: &dyn RecipeSource) {
        if !self.begin_initialize() {
            return;
        }
        let outcome = source.fetch_catalog().await;
        self.complete_initialize(outcome);
    }

    /// Mark the catalog fetch as issued.
    ///
    /// Returns `false` if it was already issued; the caller must then not fetch.
    pub fn begin_initialize(&mut self) -> bool {
        if self.fetch_issued {
            warn!("Recipe catalog was already requested, not fetching again");
            return false;
        }
        self.fetch_issued = true;
        true
    }

    /// Apply the outcome of the catalog fetch.
    pub fn complete_initialize(&mut self, outcome: Result<Vec<Recipe>, FetchError>) {
        match outcome {
            Ok(recipes) => {
                info!("Loaded {} recipes", recipes.len());
                self.catalog = recipes;
            }
            Err(e) => error!("Failed to fetch recipes: {}", e),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.fetch_issued
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.view = mode;
    }

    /// Add `recipe` to the saved collection unless one with the same id is
    /// already there. The first saved copy is kept as is.
    pub fn save(&mut self, recipe: Recipe) -> bool {
        if self.is_saved(recipe.id) {
            return false;
        }
        self.saved.push(recipe);
        true
    }

    /// Remove the saved recipe with `id`, if any.
    pub fn delete_saved(&mut self, id: RecipeId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|recipe| recipe.id != id);
        self.saved.len() != before
    }

    /// Show `recipe` in detail, replacing the current selection.
    pub fn select_for_detail(&mut self, recipe: &Recipe) {
        self.selection = Some(recipe.clone());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    pub fn saved(&self) -> &[Recipe] {
        &self.saved
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selection(&self) -> Option<&Recipe> {
        self.selection.as_ref()
    }

    pub fn is_saved(&self, id: RecipeId) -> bool {
        self.saved.iter().any(|recipe| recipe.id == id)
    }

    /// The collection rendered by the active view
    pub fn visible(&self) -> &[Recipe] {
        match self.view {
            ViewMode::Explore => &self.catalog,
            ViewMode::Saved => &self.saved,
        }
    }
}
