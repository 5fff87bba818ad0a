use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::model::Bookmark;
use crate::domain::bookmark::repository::BookmarkRepository;
use crate::domain::bookmark::use_cases::toggle::{ToggleBookmarkParams, ToggleBookmarkUseCase};
use crate::domain::logger::Logger;

pub struct ToggleBookmarkUseCaseImpl {
    pub repository: Arc<dyn BookmarkRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleBookmarkUseCase for ToggleBookmarkUseCaseImpl {
    async fn execute(&self, params: ToggleBookmarkParams) -> Result<bool, BookmarkError> {
        let exists = self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?;

        if exists {
            self.repository
                .delete(&params.user_id, params.recipe_id)
                .await?;
            self.logger.info(&format!(
                "Removed bookmark on recipe {} for user {}",
                params.recipe_id, params.user_id
            ));
            Ok(false)
        } else {
            let bookmark = Bookmark::new(params.user_id.clone(), params.recipe_id);
            self.repository.insert(&bookmark).await?;
            self.logger.info(&format!(
                "Added bookmark on recipe {} for user {}",
                params.recipe_id, params.user_id
            ));
            Ok(true)
        }
    }
}
