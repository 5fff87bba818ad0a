use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Reviews for one recipe, newest first, with reviewer usernames.
    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
    /// Insert, or replace the caller's previous review of the same recipe.
    async fn upsert(&self, review: &Review) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
