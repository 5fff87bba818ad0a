use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_by_recipe::{GetReviewsParams, GetReviewsUseCase};

pub struct GetReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReviewsUseCase for GetReviewsUseCaseImpl {
    async fn execute(&self, params: GetReviewsParams) -> Result<Vec<Review>, ReviewError> {
        self.logger
            .info(&format!("Fetching reviews for recipe {}", params.recipe_id));
        let reviews = self.repository.get_by_recipe(params.recipe_id).await?;
        Ok(reviews)
    }
}
