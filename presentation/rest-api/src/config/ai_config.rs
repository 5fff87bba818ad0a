/// Configuration for the AI gateway.
///
/// Environment variables:
/// - AI_GATEWAY_API_KEY: Gateway credential. May be absent; requests that
///   need the gateway then fail with a configuration error instead of the
///   process refusing to start.
/// - AI_GATEWAY_URL: Base URL override, for tests and self-hosted gateways
/// - AI_GATEWAY_MODEL: Model override
pub struct AiGatewayConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl AiGatewayConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("AI_GATEWAY_API_KEY").unwrap_or_default(),
            base_url: std::env::var("AI_GATEWAY_URL").ok(),
            model: std::env::var("AI_GATEWAY_MODEL").ok(),
        }
    }
}
