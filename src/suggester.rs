use crate::error::SuggestError;
use crate::extractor;
use crate::model::Recipe;
use crate::prompt;
use crate::providers::SuggestionProvider;
use log::{debug, warn};

/// Runs one suggestion cycle: build the prompt, call the provider, extract
/// the recipe.
///
/// The provider is injected at construction, so tests can swap in a fake and
/// no process-wide client state exists. The suggester itself is stateless:
/// every call builds its own payload and returns a brand-new [`Recipe`], so
/// concurrent calls are independent. Overlapping user-triggered calls are not
/// serialized here; debouncing is the caller's concern.
pub struct RecipeSuggester {
    provider: Box<dyn SuggestionProvider>,
}

impl RecipeSuggester {
    pub fn new(provider: Box<dyn SuggestionProvider>) -> Self {
        RecipeSuggester { provider }
    }

    /// Suggest a recipe for the given ingredient names.
    ///
    /// Only transport-class faults abort the operation; once the provider
    /// call succeeds this always yields a recipe, possibly a degraded one
    /// (see [`Recipe::is_empty`]).
    pub async fn suggest(&self, ingredients: &[String]) -> Result<Recipe, SuggestError> {
        debug!(
            "Requesting suggestion from {} for {} ingredients",
            self.provider.provider_name(),
            ingredients.len()
        );

        let request = prompt::build(ingredients);
        let raw = self.provider.complete(&request).await?;
        let recipe = extractor::extract(&raw);

        if recipe.is_empty() {
            warn!("Reply did not follow the recipe markup; returning an empty recipe");
        } else {
            debug!(
                "Extracted recipe '{}' ({} ingredients, {} steps)",
                recipe.title,
                recipe.ingredients.len(),
                recipe.instructions.len()
            );
        }

        Ok(recipe)
    }
}
