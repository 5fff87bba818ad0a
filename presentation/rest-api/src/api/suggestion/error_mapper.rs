use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            SuggestionError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "Please provide at least one ingredient",
            ),
            SuggestionError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.",
            ),
            SuggestionError::QuotaExceeded => (
                StatusCode::PAYMENT_REQUIRED,
                "Usage limit reached. Please add credits.",
            ),
            SuggestionError::Misconfigured
            | SuggestionError::UpstreamError(_)
            | SuggestionError::UpstreamUnreachable
            | SuggestionError::Timeout
            | SuggestionError::MalformedSuggestion => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get recipe suggestions",
            ),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_rate_limit_to_429() {
        let (status, json) = SuggestionError::RateLimited.into_error_response();

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json.0.error, "Rate limit exceeded. Please try again later.");
    }

    #[test]
    fn should_map_quota_to_402() {
        let (status, json) = SuggestionError::QuotaExceeded.into_error_response();

        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(json.0.error, "Usage limit reached. Please add credits.");
    }

    #[test]
    fn should_not_leak_upstream_detail_on_500() {
        for err in [
            SuggestionError::Misconfigured,
            SuggestionError::UpstreamError(503),
            SuggestionError::UpstreamUnreachable,
            SuggestionError::Timeout,
            SuggestionError::MalformedSuggestion,
        ] {
            let (status, json) = err.into_error_response();

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json.0.error, "Failed to get recipe suggestions");
        }
    }
}
