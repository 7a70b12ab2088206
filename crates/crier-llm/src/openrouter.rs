use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::GenerateError;
use crate::generator::{ModelTier, TextGenerator};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

const DEFAULT_SMALL_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_MEDIUM_MODEL: &str = "anthropic/claude-3.5-sonnet";
const DEFAULT_LARGE_MODEL: &str = "anthropic/claude-3-opus";

/// Configuration for the OpenRouter backend.
#[derive(Clone, Debug)]
pub struct OpenRouterConfig {
    pub api_key: String,
    /// Override the API base URL (tests point this at a local fake).
    pub base_url: Option<String>,
    pub small_model: Option<String>,
    pub medium_model: Option<String>,
    pub large_model: Option<String>,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            small_model: None,
            medium_model: None,
            large_model: None,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// OpenRouter-backed text generator.
pub struct OpenRouterGenerator {
    config: OpenRouterConfig,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterGenerator {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a generator sharing an existing `reqwest::Client`.
    pub fn with_client(config: OpenRouterConfig, client: reqwest::Client) -> Self {
        let mut base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { config, base_url, client }
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        let (configured, default) = match tier {
            ModelTier::Small => (&self.config.small_model, DEFAULT_SMALL_MODEL),
            ModelTier::Medium => (&self.config.medium_model, DEFAULT_MEDIUM_MODEL),
            ModelTier::Large => (&self.config.large_model, DEFAULT_LARGE_MODEL),
        };
        configured.as_deref().unwrap_or(default)
    }

    fn build_headers(&self) -> Result<HeaderMap, GenerateError> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth_value = format!("Bearer {}", self.config.api_key);
        let _ = headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| GenerateError::InvalidRequest(format!("invalid API key header: {e}")))?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl TextGenerator for OpenRouterGenerator {
    async fn generate(&self, prompt: &str, tier: ModelTier) -> Result<String, GenerateError> {
        let model = self.model_for(tier);
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model, tier = tier.as_str(), "requesting generation");

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::from_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::NetworkError(e.to_string()))?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| GenerateError::Decode(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerateError::Decode("response has no choices".into()))?;
        Ok(choice.message.content)
    }
}
