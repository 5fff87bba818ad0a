use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};

pub struct DeleteReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteReviewUseCase for DeleteReviewUseCaseImpl {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError> {
        let review = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        if review.user_id != params.user_id {
            self.logger.warn(&format!(
                "User {} attempted to delete review {} owned by another user",
                params.user_id, params.id
            ));
            return Err(ReviewError::NotOwner);
        }

        self.repository.delete(params.id).await?;
        self.logger.info(&format!("Deleted review {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::model::{NewReviewProps, Review};
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

    fn review_owned_by(owner: &str) -> Review {
        Review::new(NewReviewProps {
            recipe_id: Uuid::new_v4(),
            user_id: UserId::new(owner),
            rating: 3,
            comment: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_delete_own_review() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(review_owned_by("user-1")));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_refuse_to_delete_someone_elses_review() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(review_owned_by("user-1")));
        mock_repo.expect_delete().times(0);

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("user-2"),
            })
            .await;

        assert!(matches!(result, Err(ReviewError::NotOwner)));
    }

    #[tokio::test]
    async fn should_map_missing_review_to_not_found() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteReviewParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
            })
            .await;

        assert!(matches!(result, Err(ReviewError::NotFound)));
    }
}
