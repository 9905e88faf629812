use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Top-level configuration for the suggestion pipeline
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestConfig {
    /// Provider configuration (Groq chat completions)
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the LLM provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// API key for authentication (can also be set via the GROQ_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies or testing)
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions
fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_top_p() -> f32 {
    1.0
}

fn default_timeout() -> u64 {
    30
}

impl SuggestConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: PANTRY_CHEF__PROVIDER__MODEL
            .add_source(
                Environment::with_prefix("PANTRY_CHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_model(), "llama3-8b-8192");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 1024);
        assert_eq!(default_top_p(), 1.0);
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_provider_config_default() {
        let provider = ProviderConfig::default();
        assert_eq!(provider.model, "llama3-8b-8192");
        assert!(provider.api_key.is_none());
        assert!(provider.base_url.is_none());
    }

    #[test]
    fn test_suggest_config_timeout_duration() {
        let config = SuggestConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
