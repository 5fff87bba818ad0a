use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::UserId;

/// A user's saved recipe.
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: UserId, recipe_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            recipe_id,
            created_at: Utc::now(),
        }
    }
}

/// A bookmark joined with the recipe it points at, for the favorites
/// listing.
#[derive(Debug, Clone)]
pub struct BookmarkedRecipe {
    pub bookmark: Bookmark,
    pub recipe: Recipe,
}
