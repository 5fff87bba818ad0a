use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";
const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Shared AI gateway HTTP client configuration.
pub struct GatewayClient {
    pub client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GatewayClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// True when an API key is present. Checked before every outbound call.
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
