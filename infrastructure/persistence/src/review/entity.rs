use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::review::model::Review;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Review {
        Review::from_repository(
            self.id,
            self.recipe_id,
            UserId::new(&self.user_id),
            self.rating,
            self.comment,
            self.username,
            self.created_at,
        )
    }
}
