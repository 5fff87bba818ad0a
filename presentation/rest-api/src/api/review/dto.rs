use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    /// Review unique identifier
    pub id: Uuid,
    /// Reviewed recipe
    pub recipe_id: Uuid,
    /// Author subject identifier
    pub user_id: String,
    /// Rating from 1 to 5
    pub rating: i32,
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Author display name, when a profile exists
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            recipe_id: r.recipe_id,
            user_id: r.user_id.to_string(),
            rating: r.rating,
            comment: r.comment,
            username: r.username,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubmitReviewRequest {
    /// Rating from 1 to 5
    pub rating: i32,
    #[oai(default)]
    pub comment: Option<String>,
}
