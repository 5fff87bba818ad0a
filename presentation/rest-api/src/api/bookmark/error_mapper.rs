use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::bookmark::errors::BookmarkError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BookmarkError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            BookmarkError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
