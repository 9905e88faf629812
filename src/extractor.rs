use crate::model::Recipe;
use log::debug;
use scraper::{Html, Selector};

/// Extract a structured [`Recipe`] from the model's raw reply.
///
/// The reply is treated as an HTML document and fields are located by the
/// class markers the prompt template asks for. This never fails: html5ever
/// tolerates unclosed tags, stray text, and missing wrappers, and any section
/// that cannot be found simply stays empty. Plain text or garbage input yields
/// an all-empty recipe.
pub fn extract(raw: &str) -> Recipe {
    let document = Html::parse_document(raw);

    // First and second .recipe-time in document order are prep and cook time;
    // any further occurrences are ignored.
    let mut times = select_texts(&document, ".recipe-time").into_iter();
    let prep_time = times.next().unwrap_or_default();
    let cook_time = times.next().unwrap_or_default();

    let recipe = Recipe {
        title: first_text(&document, ".recipe-title"),
        difficulty: first_text(&document, ".recipe-difficulty"),
        prep_time,
        cook_time,
        servings: first_text(&document, ".recipe-servings"),
        ingredients: select_texts(&document, ".recipe-ingredients li"),
        instructions: select_texts(&document, ".recipe-instructions li"),
        notes: first_text(&document, ".recipe-notes p"),
    };

    if recipe.is_empty() {
        debug!("No recipe markers found in reply ({} bytes)", raw.len());
    }

    recipe
}

/// Trimmed text content of the first element matching `selector`, or empty.
fn first_text(document: &Html, selector: &str) -> String {
    select_texts(document, selector).into_iter().next().unwrap_or_default()
}

/// Trimmed text content of every element matching `selector`, in document
/// order. Elements with no text stay as empty strings so positions are
/// preserved: the first matching element is always the first entry, even
/// when it is empty.
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}
