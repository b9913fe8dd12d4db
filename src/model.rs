use serde::{Deserialize, Deserializer};

/// Identifier of a recipe, unique within one catalog fetch
pub type RecipeId = i64;

/// A recipe as served by the catalog endpoint.
///
/// Only the four fields below are read; anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Kept verbatim; never parsed as a number.
    #[serde(deserialize_with = "rating_as_text")]
    pub rating: String,
    pub image: String,
}

/// Envelope of the catalog endpoint: `{ "recipes": [...], "total": .., ... }`
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    pub recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingValue {
    Text(String),
    Number(serde_json::Number),
}

// The public endpoint serves ratings as numbers (`4.6`), older fixtures as strings.
fn rating_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RatingValue::deserialize(deserializer)? {
        RatingValue::Text(text) => text,
        RatingValue::Number(number) => number.to_string(),
    })
}
