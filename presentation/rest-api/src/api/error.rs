use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape for every non-success response: a single human-readable
/// message under the `error` key.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
