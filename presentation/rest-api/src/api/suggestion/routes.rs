use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::suggest::{
    SuggestRecipesParams, SuggestRecipesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{
    SuggestedRecipeResponse, SuggestionListResponse, SuggestionRequest,
};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestRecipesUseCase>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestRecipesUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Suggestion API
///
/// AI-generated Asian recipe suggestions from a list of ingredients the
/// caller has on hand.
#[OpenApi]
impl SuggestionApi {
    /// Suggest recipes from ingredients
    ///
    /// Sends the ingredient list to the AI gateway and returns the
    /// suggested recipes. The prompt asks for 3, but the response
    /// carries whatever the model produced.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestionRequest>) -> SuggestResponse {
        match self
            .suggest_use_case
            .execute(SuggestRecipesParams {
                ingredients: body.0.ingredient_strings(),
            })
            .await
        {
            Ok(recipes) => {
                let recipes: Vec<SuggestedRecipeResponse> =
                    recipes.into_iter().map(|r| r.into()).collect();
                SuggestResponse::Ok(Json(SuggestionListResponse { recipes }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => SuggestResponse::BadRequest(json),
                    StatusCode::PAYMENT_REQUIRED => SuggestResponse::PaymentRequired(json),
                    StatusCode::TOO_MANY_REQUESTS => SuggestResponse::TooManyRequests(json),
                    _ => SuggestResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 402)]
    PaymentRequired(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
