use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;

use super::entity::ReviewEntity;

const REVIEW_COLUMNS: &str = "r.id, r.recipe_id, r.user_id, r.rating, r.comment, p.username AS username, r.created_at";

pub struct ReviewRepositoryPostgres {
    pool: PgPool,
}

impl ReviewRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReviewEntity>(&format!(
            "SELECT {} FROM reviews r LEFT JOIN profiles p ON p.user_id = r.user_id WHERE r.recipe_id = $1 ORDER BY r.created_at DESC",
            REVIEW_COLUMNS
        ))
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError> {
        let entity = sqlx::query_as::<_, ReviewEntity>(&format!(
            "SELECT {} FROM reviews r LEFT JOIN profiles p ON p.user_id = r.user_id WHERE r.id = $1",
            REVIEW_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn upsert(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reviews (id, recipe_id, user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (recipe_id, user_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                comment = EXCLUDED.comment,
                created_at = EXCLUDED.created_at"#,
        )
        .bind(review.id)
        .bind(review.recipe_id)
        .bind(review.user_id.as_str())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
