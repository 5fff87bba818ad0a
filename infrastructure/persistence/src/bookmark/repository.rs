use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::bookmark::model::{Bookmark, BookmarkedRecipe};
use business::domain::bookmark::repository::BookmarkRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::BookmarkedRecipeEntity;

pub struct BookmarkRepositoryPostgres {
    pool: PgPool,
}

impl BookmarkRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<BookmarkedRecipe>, RepositoryError> {
        let entities = sqlx::query_as::<_, BookmarkedRecipeEntity>(
            r#"SELECT
                b.id AS bookmark_id,
                b.user_id AS bookmark_user_id,
                b.created_at AS bookmarked_at,
                r.id, r.title, r.description, r.image_url, r.cuisine, r.meal_type,
                r.spice_level, r.prep_time, r.cook_time, r.servings, r.calories,
                r.ingredients, r.instructions, r.is_vegetarian, r.is_vegan,
                r.is_halal, r.is_gluten_free, r.is_approved, r.created_at
            FROM bookmarks b
            JOIN recipes r ON r.id = b.recipe_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE user_id = $1 AND recipe_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists)
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO bookmarks (id, user_id, recipe_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, recipe_id) DO NOTHING"#,
        )
        .bind(bookmark.id)
        .bind(bookmark.user_id.as_str())
        .bind(bookmark.recipe_id)
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id.as_str())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
