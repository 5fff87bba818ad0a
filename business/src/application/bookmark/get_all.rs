use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::model::BookmarkedRecipe;
use crate::domain::bookmark::repository::BookmarkRepository;
use crate::domain::bookmark::use_cases::get_all::{GetBookmarksParams, GetBookmarksUseCase};
use crate::domain::logger::Logger;

pub struct GetBookmarksUseCaseImpl {
    pub repository: Arc<dyn BookmarkRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBookmarksUseCase for GetBookmarksUseCaseImpl {
    async fn execute(
        &self,
        params: GetBookmarksParams,
    ) -> Result<Vec<BookmarkedRecipe>, BookmarkError> {
        let bookmarks = self.repository.get_all(&params.user_id).await?;
        self.logger.info(&format!(
            "Found {} bookmarks for user {}",
            bookmarks.len(),
            params.user_id
        ));
        Ok(bookmarks)
    }
}
