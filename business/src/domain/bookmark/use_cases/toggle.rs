use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::shared::value_objects::UserId;

pub struct ToggleBookmarkParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait ToggleBookmarkUseCase: Send + Sync {
    /// Returns the state after toggling: true when the recipe is now
    /// bookmarked.
    async fn execute(&self, params: ToggleBookmarkParams) -> Result<bool, BookmarkError>;
}
