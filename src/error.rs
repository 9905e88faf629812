use thiserror::Error;

/// Errors that can occur during a suggestion cycle
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Network-level failure talking to the LLM provider (includes timeouts)
    #[error("Request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Provider answered 2xx but the body was not the expected completion envelope
    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Missing API key (not in config and not in the environment)
    #[error("API key not found: set providers.{0}.api_key or the {1} environment variable")]
    MissingApiKey(&'static str, &'static str),
}
