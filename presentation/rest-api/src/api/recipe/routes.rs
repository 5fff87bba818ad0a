use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};
use business::domain::recipe::value_objects::RecipeFilters;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{CuisineDto, MealTypeDto, RecipeResponse, SpiceLevelDto};
use crate::api::tags::ApiTags;

use business::domain::recipe::errors::RecipeError;

pub struct RecipeApi {
    list_use_case: Arc<dyn ListRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
}

impl RecipeApi {
    pub fn new(
        list_use_case: Arc<dyn ListRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_by_id_use_case,
        }
    }
}

/// Recipe API
///
/// Public read access to the approved recipe catalogue.
#[OpenApi]
impl RecipeApi {
    /// List approved recipes
    ///
    /// Returns approved recipes, newest first. All filters are optional
    /// and combine with AND; repeat a filter parameter to allow several
    /// values for it.
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    #[allow(clippy::too_many_arguments)]
    async fn list_recipes(
        &self,
        cuisine: Query<Option<Vec<CuisineDto>>>,
        meal_type: Query<Option<Vec<MealTypeDto>>>,
        spice_level: Query<Option<Vec<SpiceLevelDto>>>,
        vegetarian: Query<Option<bool>>,
        vegan: Query<Option<bool>>,
        halal: Query<Option<bool>>,
        gluten_free: Query<Option<bool>>,
        /// Case-insensitive substring match on the title
        search: Query<Option<String>>,
    ) -> ListRecipesResponse {
        let filters = RecipeFilters {
            cuisines: cuisine
                .0
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.into())
                .collect(),
            meal_types: meal_type
                .0
                .unwrap_or_default()
                .into_iter()
                .map(|m| m.into())
                .collect(),
            spice_levels: spice_level
                .0
                .unwrap_or_default()
                .into_iter()
                .map(|s| s.into())
                .collect(),
            vegetarian: vegetarian.0.unwrap_or(false),
            vegan: vegan.0.unwrap_or(false),
            halal: halal.0.unwrap_or(false),
            gluten_free: gluten_free.0.unwrap_or(false),
            search: search.0.filter(|s| !s.trim().is_empty()),
        };

        match self
            .list_use_case
            .execute(ListRecipesParams { filters })
            .await
        {
            Ok(recipes) => {
                let responses: Vec<RecipeResponse> =
                    recipes.into_iter().map(|r| r.into()).collect();
                ListRecipesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListRecipesResponse::InternalError(json)
            }
        }
    }

    /// Get one recipe
    ///
    /// Returns a single approved recipe by id.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe(&self, id: Path<Uuid>) -> GetRecipeResponse {
        match self
            .get_by_id_use_case
            .execute(GetRecipeByIdParams { id: id.0 })
            .await
        {
            Ok(recipe) => GetRecipeResponse::Ok(Json(recipe.into())),
            Err(err @ RecipeError::NotFound) => {
                let (_, json) = err.into_error_response();
                GetRecipeResponse::NotFound(json)
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetRecipeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
