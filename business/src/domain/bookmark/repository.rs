use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Bookmark, BookmarkedRecipe};

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// The caller's bookmarks joined with their recipes, newest first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<BookmarkedRecipe>, RepositoryError>;
    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
    async fn insert(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
}
