/// The system prompt establishing the chef persona for recipe suggestions.
///
/// Loaded from `prompts/system.txt` at compile time using the `include_str!`
/// macro, making it easy to edit without dealing with Rust string syntax.
pub const CHEF_SYSTEM_PROMPT: &str = include_str!("prompts/system.txt");

/// The HTML skeleton the model is asked to fill in. The class names in this
/// template are the markers the extractor looks up, so the two must stay in
/// sync.
pub const RESPONSE_TEMPLATE: &str = include_str!("prompts/response_template.html");

/// A chat-completion request payload: one system message and one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
}

/// Build the request payload for a list of ingredient names.
///
/// Pure and deterministic. Ingredient order and duplicates are preserved in
/// the user message; an empty list still produces a valid payload (the model
/// is told it may assume common pantry staples).
pub fn build(ingredients: &[String]) -> ChatRequest {
    let user = format!(
        "Create a recipe using some or all of these ingredients: {}.\n\n\
         Please format your response in HTML with the following structure:\n\n\
         {}\n\
         Ensure the recipe is creative, uses the ingredients efficiently, and provides \
         clear instructions. If there are common pantry items not listed in the \
         ingredients (like salt, pepper, or oil), you can assume they are available \
         and include them in the recipe.",
        ingredients.join(", "),
        RESPONSE_TEMPLATE,
    );

    ChatRequest {
        system: CHEF_SYSTEM_PROMPT.trim_end().to_string(),
        user,
    }
}
