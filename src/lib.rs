pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod suggester;

pub use config::{ProviderConfig, SuggestConfig};
pub use error::SuggestError;
pub use model::Recipe;
pub use providers::{GroqProvider, SuggestionProvider};
pub use suggester::RecipeSuggester;

/// Run one suggestion cycle using configuration from `config.toml` and the
/// environment.
///
/// Convenience wrapper for callers that do not need to manage the provider
/// lifecycle themselves; construct a [`RecipeSuggester`] directly to reuse
/// one provider across calls.
pub async fn suggest_recipe(ingredients: &[String]) -> Result<Recipe, SuggestError> {
    let config = SuggestConfig::load()?;
    let provider = GroqProvider::new(&config.provider, config.timeout())?;
    let suggester = RecipeSuggester::new(Box::new(provider));

    suggester.suggest(ingredients).await
}
