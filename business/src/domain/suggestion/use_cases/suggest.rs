use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::SuggestedRecipe;

pub struct SuggestRecipesParams {
    /// Raw ingredient strings as entered by the caller; normalization
    /// and deduplication happen inside the use case.
    pub ingredients: Vec<String>,
}

#[async_trait]
pub trait SuggestRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SuggestRecipesParams,
    ) -> Result<Vec<SuggestedRecipe>, SuggestionError>;
}
