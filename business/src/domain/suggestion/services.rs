use async_trait::async_trait;

use super::errors::SuggestionError;
use super::model::{IngredientList, SuggestionPayload};

/// Service port for generating recipe suggestions from an ingredient
/// list. One invocation means exactly one upstream call; no retries.
#[async_trait]
pub trait SuggestionGeneratorService: Send + Sync {
    async fn suggest(
        &self,
        ingredients: &IngredientList,
    ) -> Result<SuggestionPayload, SuggestionError>;
}
