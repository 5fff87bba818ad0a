use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::value_objects::RecipeFilters;

pub struct ListRecipesParams {
    pub filters: RecipeFilters,
}

#[async_trait]
pub trait ListRecipesUseCase: Send + Sync {
    async fn execute(&self, params: ListRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
