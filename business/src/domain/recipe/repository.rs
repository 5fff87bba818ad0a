use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Recipe;
use super::value_objects::RecipeFilters;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Approved recipes matching the filters, newest first.
    async fn get_approved(&self, filters: &RecipeFilters) -> Result<Vec<Recipe>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
}
