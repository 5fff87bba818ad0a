use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct GetRecipeByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetRecipeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<Recipe, RecipeError>;
}
