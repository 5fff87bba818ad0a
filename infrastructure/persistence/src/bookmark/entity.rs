use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bookmark::model::{Bookmark, BookmarkedRecipe};
use business::domain::shared::value_objects::UserId;

use crate::recipe::entity::RecipeEntity;

/// A bookmark row joined with its recipe. The bookmark columns are
/// aliased in the query so they do not collide with the recipe's.
#[derive(Debug, FromRow)]
pub struct BookmarkedRecipeEntity {
    pub bookmark_id: Uuid,
    pub bookmark_user_id: String,
    pub bookmarked_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub recipe: RecipeEntity,
}

impl BookmarkedRecipeEntity {
    pub fn into_domain(self) -> BookmarkedRecipe {
        let recipe = self.recipe.into_domain();
        BookmarkedRecipe {
            bookmark: Bookmark {
                id: self.bookmark_id,
                user_id: UserId::new(&self.bookmark_user_id),
                recipe_id: recipe.id,
                created_at: self.bookmarked_at,
            },
            recipe,
        }
    }
}
