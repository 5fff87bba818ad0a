use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::shared::value_objects::UserId;

pub struct IsBookmarkedParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait IsBookmarkedUseCase: Send + Sync {
    async fn execute(&self, params: IsBookmarkedParams) -> Result<bool, BookmarkError>;
}
