use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::model::BookmarkedRecipe;
use crate::domain::shared::value_objects::UserId;

pub struct GetBookmarksParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetBookmarksUseCase: Send + Sync {
    async fn execute(&self, params: GetBookmarksParams)
    -> Result<Vec<BookmarkedRecipe>, BookmarkError>;
}
