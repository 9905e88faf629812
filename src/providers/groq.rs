use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::prompt::ChatRequest;
use crate::providers::SuggestionProvider;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
const DEFAULT_BASE_URL: &str = "https://api.groq.com";

/// Client for Groq's OpenAI-compatible chat-completions endpoint.
///
/// One outbound HTTP call per `complete` invocation; no retries, no caching.
/// Sampling parameters come from configuration, not from the request.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

impl GroqProvider {
    /// Create a new Groq provider from configuration.
    ///
    /// The API key is taken from the config, falling back to the
    /// `GROQ_API_KEY` environment variable.
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, SuggestError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(GROQ_API_KEY_ENV).ok())
            .ok_or(SuggestError::MissingApiKey("groq", GROQ_API_KEY_ENV))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(GroqProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GroqProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 1.0,
        }
    }
}

#[async_trait]
impl SuggestionProvider for GroqProvider {
    fn provider_name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, SuggestError> {
        let response = self
            .client
            .post(format!("{}/openai/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": request.system},
                    {"role": "user", "content": request.user}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens,
                "top_p": self.top_p,
                "stream": false
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::Provider { status, body });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| SuggestError::InvalidResponse(e.to_string()))?;
        debug!("{:?}", envelope);

        // A well-formed envelope with no content is recoverable: return an
        // empty completion and let the extractor produce a degraded recipe.
        match envelope["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => {
                warn!("Provider returned an empty completion");
                Ok(String::new())
            }
        }
    }
}
