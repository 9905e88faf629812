use log::error;
use pantry_chef::{GroqProvider, RecipeSuggester, SuggestConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Ingredient names come from the command line, one per argument
    let ingredients: Vec<String> = env::args().skip(1).collect();

    let config = SuggestConfig::load()?;
    let provider = GroqProvider::new(&config.provider, config.timeout())?;
    let suggester = RecipeSuggester::new(Box::new(provider));

    let recipe = suggester.suggest(&ingredients).await?;
    if recipe.is_empty() {
        error!("The model's reply did not contain a usable recipe.");
    }
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
