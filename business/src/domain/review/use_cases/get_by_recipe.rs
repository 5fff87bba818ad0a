use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;

pub struct GetReviewsParams {
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait GetReviewsUseCase: Send + Sync {
    async fn execute(&self, params: GetReviewsParams) -> Result<Vec<Review>, ReviewError>;
}
