use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::bookmark::model::BookmarkedRecipe;

use crate::api::recipe::dto::RecipeResponse;

#[derive(Debug, Clone, Object)]
pub struct BookmarkedRecipeResponse {
    /// The bookmarked recipe
    pub recipe: RecipeResponse,
    /// When the caller bookmarked it
    pub bookmarked_at: DateTime<Utc>,
}

impl From<BookmarkedRecipe> for BookmarkedRecipeResponse {
    fn from(b: BookmarkedRecipe) -> Self {
        Self {
            recipe: b.recipe.into(),
            bookmarked_at: b.bookmark.created_at,
        }
    }
}

/// Membership state after a lookup or toggle.
#[derive(Debug, Clone, Object)]
pub struct BookmarkStateResponse {
    pub bookmarked: bool,
}
