use serde::Serialize;

/// A structured recipe extracted from the model's HTML reply.
///
/// Every field is always present: anything the reply did not contain is an
/// empty string or empty list, so callers never need to null-check. A recipe
/// where everything is empty is the degraded-extraction state, which is
/// distinct from a transport failure upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub difficulty: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: String,
}

impl Recipe {
    /// True when extraction found nothing at all, i.e. the model's reply did
    /// not follow the expected markup. Callers should present this differently
    /// from a failed request.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.difficulty.is_empty()
            && self.prep_time.is_empty()
            && self.cook_time.is_empty()
            && self.servings.is_empty()
            && self.ingredients.is_empty()
            && self.instructions.is_empty()
            && self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipe_is_empty() {
        assert!(Recipe::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_recipe_non_empty() {
        let recipe = Recipe {
            title: "Tomato Soup".to_string(),
            ..Default::default()
        };
        assert!(!recipe.is_empty());

        let recipe = Recipe {
            ingredients: vec!["2 tomatoes".to_string()],
            ..Default::default()
        };
        assert!(!recipe.is_empty());
    }
}
