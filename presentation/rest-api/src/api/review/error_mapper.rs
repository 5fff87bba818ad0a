use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ReviewError::InvalidRating => {
                (StatusCode::BAD_REQUEST, "Rating must be between 1 and 5")
            }
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "Review not found"),
            ReviewError::NotOwner => (
                StatusCode::FORBIDDEN,
                "You can only delete your own reviews",
            ),
            ReviewError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
