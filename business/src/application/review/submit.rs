use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::{NewReviewProps, Review};
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::submit::{SubmitReviewParams, SubmitReviewUseCase};

pub struct SubmitReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitReviewUseCase for SubmitReviewUseCaseImpl {
    async fn execute(&self, params: SubmitReviewParams) -> Result<Review, ReviewError> {
        let review = Review::new(NewReviewProps {
            recipe_id: params.recipe_id,
            user_id: params.user_id,
            rating: params.rating,
            comment: params.comment,
        })?;

        self.repository.upsert(&review).await?;

        self.logger.info(&format!(
            "Stored review {} for recipe {}",
            review.id, review.recipe_id
        ));

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ReviewRepo {}

        #[async_trait]
        impl ReviewRepository for ReviewRepo {
            async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
            async fn upsert(&self, review: &Review) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_store_valid_review() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo.expect_upsert().times(1).returning(|_| Ok(()));

        let use_case = SubmitReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitReviewParams {
                recipe_id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
                rating: 4,
                comment: Some("Tasty".to_string()),
            })
            .await;

        assert_eq!(result.unwrap().rating, 4);
    }

    #[tokio::test]
    async fn should_reject_invalid_rating_without_touching_repository() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo.expect_upsert().times(0);

        let use_case = SubmitReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitReviewParams {
                recipe_id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
                rating: 9,
                comment: None,
            })
            .await;

        assert!(matches!(result, Err(ReviewError::InvalidRating)));
    }
}
