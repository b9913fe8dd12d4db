use std::fmt::Write;

use crate::model::{Recipe, RecipeId};
use crate::state::{RecipeBrowserState, ViewMode};

/// Render the listing of the active view, one numbered line per recipe
pub fn render_listing(state: &RecipeBrowserState) -> String {
    let (title, empty) = match state.view() {
        ViewMode::Explore => ("Explore Recipes", "No recipes loaded."),
        ViewMode::Saved => ("Saved Recipes", "No saved recipes."),
    };

    let mut out = format!("== {title} ==\n");
    let recipes = state.visible();
    if recipes.is_empty() {
        out.push_str(empty);
        out.push('\n');
        return out;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        let marker = if state.view() == ViewMode::Explore && state.is_saved(recipe.id) {
            " [saved]"
        } else {
            ""
        };
        let _ = writeln!(out, "{:>3}. {}{}", i + 1, recipe.name, marker);
    }
    out
}

/// Render the detail overlay for one recipe
pub fn render_detail(recipe: &Recipe) -> String {
    format!(
        "+ {}\n| Rating: {}\n| Image: {}\n+ (close)\n",
        recipe.name, recipe.rating, recipe.image
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: RecipeId, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            rating: "4.5".to_string(),
            image: format!("http://x/{id}.png"),
        }
    }

    #[test]
    fn test_render_explore_marks_saved() {
        let mut state = RecipeBrowserState::new();
        state.complete_initialize(Ok(vec![recipe(1, "Soup"), recipe(2, "Salad")]));
        state.save(recipe(2, "Salad"));

        let listing = render_listing(&state);
        assert_eq!(
            listing,
            "== Explore Recipes ==\n  1. Soup\n  2. Salad [saved]\n"
        );
    }

    #[test]
    fn test_render_empty_saved() {
        let mut state = RecipeBrowserState::new();
        state.set_view(ViewMode::Saved);
        assert_eq!(render_listing(&state), "== Saved Recipes ==\nNo saved recipes.\n");
    }

    #[test]
    fn test_render_detail() {
        let detail = render_detail(&recipe(1, "Soup"));
        assert!(detail.contains("Soup"));
        assert!(detail.contains("Rating: 4.5"));
        assert!(detail.contains("http://x/1.png"));
    }
}
