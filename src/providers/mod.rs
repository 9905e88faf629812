mod groq;

pub use groq::GroqProvider;

use crate::error::SuggestError;
use crate::prompt::ChatRequest;
use async_trait::async_trait;

/// The network boundary of the suggestion pipeline.
///
/// Implementations send one chat-completion request and return the raw reply
/// text. A reply with no content is an empty string, not an error, so the
/// extractor always gets a chance to run.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "groq")
    fn provider_name(&self) -> &str;

    /// Send the request and return the raw completion text
    async fn complete(&self, request: &ChatRequest) -> Result<String, SuggestError>;
}
