use poem::middleware::Cors;
use std::env;

/// Cross-origin policy for the HTTP surface.
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset (or blank), any origin is permitted and credentials are
///   not allowed; browsers reject wildcard-with-credentials responses.
///
/// Configuration:
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: content-type, authorization, x-client-info, apikey
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    AnyOrigin,
    Restricted(Vec<String>),
}

impl CorsPolicy {
    fn from_override(value: Option<String>) -> Self {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Restricted(origins)
        }
    }

    fn into_middleware(self) -> Cors {
        let cors = Cors::new()
            .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
            .allow_headers(vec![
                "content-type",
                "authorization",
                "x-client-info",
                "apikey",
            ]);

        match self {
            CorsPolicy::AnyOrigin => cors,
            CorsPolicy::Restricted(origins) => {
                cors.allow_origins(origins).allow_credentials(true)
            }
        }
    }
}

pub fn init_cors() -> Cors {
    CorsPolicy::from_override(env::var("CORS_ALLOWED_ORIGINS").ok()).into_middleware()
}
