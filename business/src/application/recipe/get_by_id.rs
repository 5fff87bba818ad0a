use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<Recipe, RecipeError> {
        self.logger
            .info(&format!("Fetching recipe {}", params.id));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        // Unapproved recipes are invisible on the public surface.
        if !recipe.is_approved {
            return Err(RecipeError::NotFound);
        }

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn recipe(id: Uuid, approved: bool) -> Recipe {
        Recipe {
            id,
            title: "Mee Goreng".to_string(),
            description: Some("Fried noodles".to_string()),
            image_url: None,
            cuisine: Cuisine::Malaysian,
            meal_type: MealType::LunchDinner,
            spice_level: SpiceLevel::Medium,
            prep_time: Some(15),
            cook_time: Some(15),
            servings: 2,
            calories: Some(550),
            ingredients: vec!["noodles".to_string()],
            instructions: vec!["Fry the noodles".to_string()],
            is_vegetarian: false,
            is_vegan: false,
            is_halal: true,
            is_gluten_free: false,
            is_approved: approved,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_return_approved_recipe() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(recipe(id, true)));

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetRecipeByIdParams { id }).await;

        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_hide_unapproved_recipe() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(recipe(id, false)));

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(RecipeError::NotFound)));
    }

    #[tokio::test]
    async fn should_map_missing_row_to_not_found() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(RecipeError::NotFound)));
    }
}
