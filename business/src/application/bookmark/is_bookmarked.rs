use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::repository::BookmarkRepository;
use crate::domain::bookmark::use_cases::is_bookmarked::{IsBookmarkedParams, IsBookmarkedUseCase};
use crate::domain::logger::Logger;

pub struct IsBookmarkedUseCaseImpl {
    pub repository: Arc<dyn BookmarkRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IsBookmarkedUseCase for IsBookmarkedUseCaseImpl {
    async fn execute(&self, params: IsBookmarkedParams) -> Result<bool, BookmarkError> {
        let exists = self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?;
        Ok(exists)
    }
}
