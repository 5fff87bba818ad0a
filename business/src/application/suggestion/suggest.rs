use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{IngredientList, SuggestedRecipe};
use crate::domain::suggestion::services::SuggestionGeneratorService;
use crate::domain::suggestion::use_cases::suggest::{SuggestRecipesParams, SuggestRecipesUseCase};

pub struct SuggestRecipesUseCaseImpl {
    pub generator: Arc<dyn SuggestionGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestRecipesUseCase for SuggestRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestRecipesParams,
    ) -> Result<Vec<SuggestedRecipe>, SuggestionError> {
        let ingredients = IngredientList::from_raw(&params.ingredients);

        // Validated before any upstream call.
        if ingredients.is_empty() {
            return Err(SuggestionError::InvalidInput);
        }

        self.logger.info(&format!(
            "Requesting suggestions for {} ingredients",
            ingredients.len()
        ));

        let payload = self.generator.suggest(&ingredients).await?;

        self.logger.info(&format!(
            "Received {} suggested recipes",
            payload.recipes.len()
        ));

        Ok(payload.recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::model::SuggestionPayload;
    use mockall::mock;

    mock! {
        pub Generator {}

        #[async_trait]
        impl SuggestionGeneratorService for Generator {
            async fn suggest(
                &self,
                ingredients: &IngredientList,
            ) -> Result<SuggestionPayload, SuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_recipe(name: &str) -> SuggestedRecipe {
        SuggestedRecipe {
            name: name.to_string(),
            description: "A quick stir fry".to_string(),
            cuisine: "Korean".to_string(),
            cook_time: "20 mins".to_string(),
            ingredients: vec!["chicken".to_string(), "rice".to_string()],
            instructions: vec!["Cook rice".to_string(), "Fry chicken".to_string()],
        }
    }

    fn use_case(generator: MockGenerator) -> SuggestRecipesUseCaseImpl {
        SuggestRecipesUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_reject_empty_ingredients_without_calling_generator() {
        let mut generator = MockGenerator::new();
        generator.expect_suggest().times(0);

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec![],
            })
            .await;

        assert!(matches!(result, Err(SuggestionError::InvalidInput)));
    }

    #[tokio::test]
    async fn should_reject_whitespace_only_ingredients_without_calling_generator() {
        let mut generator = MockGenerator::new();
        generator.expect_suggest().times(0);

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec!["   ".to_string(), "".to_string()],
            })
            .await;

        assert!(matches!(result, Err(SuggestionError::InvalidInput)));
    }

    #[tokio::test]
    async fn should_call_generator_exactly_once_with_normalized_list() {
        let mut generator = MockGenerator::new();
        generator
            .expect_suggest()
            .times(1)
            .withf(|ingredients| ingredients.as_slice() == ["chicken", "rice", "soy sauce"])
            .returning(|_| {
                Ok(SuggestionPayload {
                    recipes: vec![sample_recipe("Bibimbap")],
                })
            });

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec![
                    "Chicken".to_string(),
                    "rice ".to_string(),
                    "chicken".to_string(),
                    "Soy Sauce".to_string(),
                ],
            })
            .await;

        let recipes = result.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Bibimbap");
    }

    #[tokio::test]
    async fn should_surface_rate_limit_without_retrying() {
        let mut generator = MockGenerator::new();
        generator
            .expect_suggest()
            .times(1)
            .returning(|_| Err(SuggestionError::RateLimited));

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec!["rice".to_string()],
            })
            .await;

        assert!(matches!(result, Err(SuggestionError::RateLimited)));
    }

    #[tokio::test]
    async fn should_surface_quota_exceeded() {
        let mut generator = MockGenerator::new();
        generator
            .expect_suggest()
            .returning(|_| Err(SuggestionError::QuotaExceeded));

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec!["rice".to_string()],
            })
            .await;

        assert!(matches!(result, Err(SuggestionError::QuotaExceeded)));
    }

    #[tokio::test]
    async fn should_pass_through_recipe_lists_of_any_length() {
        let mut generator = MockGenerator::new();
        generator.expect_suggest().returning(|_| {
            Ok(SuggestionPayload {
                recipes: vec![
                    sample_recipe("Nasi Lemak"),
                    sample_recipe("Kimchi Fried Rice"),
                    sample_recipe("Oyakodon"),
                    sample_recipe("Rendang"),
                ],
            })
        });

        let result = use_case(generator)
            .execute(SuggestRecipesParams {
                ingredients: vec!["chicken".to_string(), "rice".to_string()],
            })
            .await;

        // Three is a prompt convention; consumers must not assume it.
        assert_eq!(result.unwrap().len(), 4);
    }
}
