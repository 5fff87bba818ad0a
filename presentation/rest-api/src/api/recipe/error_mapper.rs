use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "Recipe not found"),
            RecipeError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
