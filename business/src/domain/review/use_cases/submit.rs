use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::UserId;

pub struct SubmitReviewParams {
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
}

#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    async fn execute(&self, params: SubmitReviewParams) -> Result<Review, ReviewError>;
}
