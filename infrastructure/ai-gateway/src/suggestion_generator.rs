use async_trait::async_trait;
use serde_json::json;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::{IngredientList, SuggestionPayload};
use business::domain::suggestion::services::SuggestionGeneratorService;

use crate::client::GatewayClient;
use crate::extract::first_balanced_object;

const SYSTEM_PROMPT: &str = r#"You are a helpful Asian cuisine chef. Given a list of ingredients, suggest 3 delicious Asian recipes (Malaysian, Indonesian, Korean, or Japanese) that can be made using those ingredients.

You MUST respond with valid JSON only, no markdown or other formatting. The response must be an array of recipe objects with this exact structure:
{
  "recipes": [
    {
      "name": "Recipe Name",
      "description": "Brief description of the dish",
      "cuisine": "Malaysian/Indonesian/Korean/Japanese",
      "cookTime": "30 mins",
      "ingredients": ["ingredient 1", "ingredient 2"],
      "instructions": ["Step 1", "Step 2", "Step 3"]
    }
  ]
}

Keep instructions concise (5-7 steps max). Focus on dishes that prominently feature the given ingredients."#;

pub struct SuggestionGeneratorGateway {
    client: GatewayClient,
}

impl SuggestionGeneratorGateway {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    fn build_user_prompt(ingredients: &IngredientList) -> String {
        format!(
            "I have these ingredients: {}\n\nSuggest 3 Asian recipes I can make. Remember to respond with valid JSON only.",
            ingredients.to_comma_phrase()
        )
    }

    fn map_error_status(status: u16) -> SuggestionError {
        match status {
            429 => SuggestionError::RateLimited,
            402 => SuggestionError::QuotaExceeded,
            other => SuggestionError::UpstreamError(other),
        }
    }

    fn map_transport_error(err: reqwest::Error) -> SuggestionError {
        if err.is_timeout() {
            SuggestionError::Timeout
        } else {
            SuggestionError::UpstreamUnreachable
        }
    }

    fn parse_content(content: &str) -> Result<SuggestionPayload, SuggestionError> {
        if let Ok(payload) = serde_json::from_str::<SuggestionPayload>(content) {
            return Ok(payload);
        }

        if let Some(candidate) = first_balanced_object(content) {
            if let Ok(payload) = serde_json::from_str::<SuggestionPayload>(candidate) {
                return Ok(payload);
            }
        }

        tracing::error!("Failed to parse AI response: {}", content);
        Err(SuggestionError::MalformedSuggestion)
    }
}

#[async_trait]
impl SuggestionGeneratorService for SuggestionGeneratorGateway {
    async fn suggest(
        &self,
        ingredients: &IngredientList,
    ) -> Result<SuggestionPayload, SuggestionError> {
        if ingredients.is_empty() {
            return Err(SuggestionError::InvalidInput);
        }
        if !self.client.has_credential() {
            return Err(SuggestionError::Misconfigured);
        }

        let body = json!({
            "model": self.client.model(),
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_user_prompt(ingredients)},
            ],
            "temperature": 0.7,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error: {} {}", status.as_u16(), error_text);
            return Err(Self::map_error_status(status.as_u16()));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SuggestionError::MalformedSuggestion)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(SuggestionError::MalformedSuggestion)?;

        Self::parse_content(content)
    }
}
