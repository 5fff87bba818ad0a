use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};

pub struct ListRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecipesUseCase for ListRecipesUseCaseImpl {
    async fn execute(&self, params: ListRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        self.logger.info("Listing approved recipes");
        let recipes = self.repository.get_approved(&params.filters).await?;
        self.logger
            .info(&format!("Found {} matching recipes", recipes.len()));
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe::value_objects::{Cuisine, MealType, RecipeFilters, SpiceLevel};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_approved(&self, filters: &RecipeFilters) -> Result<Vec<Recipe>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
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

    fn approved_recipe(title: &str) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            image_url: None,
            cuisine: Cuisine::Korean,
            meal_type: MealType::LunchDinner,
            spice_level: SpiceLevel::Spicy,
            prep_time: Some(10),
            cook_time: Some(30),
            servings: 2,
            calories: None,
            ingredients: vec!["kimchi".to_string(), "tofu".to_string()],
            instructions: vec!["Simmer everything".to_string()],
            is_vegetarian: false,
            is_vegan: false,
            is_halal: false,
            is_gluten_free: false,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_return_recipes_matching_filters() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_approved()
            .withf(|filters| filters.cuisines == [Cuisine::Korean])
            .returning(|_| Ok(vec![approved_recipe("Kimchi Jjigae")]));

        let use_case = ListRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListRecipesParams {
                filters: RecipeFilters {
                    cuisines: vec![Cuisine::Korean],
                    ..RecipeFilters::default()
                },
            })
            .await;

        let recipes = result.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Kimchi Jjigae");
    }

    #[tokio::test]
    async fn should_map_repository_failure() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_approved()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ListRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListRecipesParams {
                filters: RecipeFilters::default(),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::Repository(_))));
    }
}
