use serde::{Deserialize, Serialize};

/// Ordered, deduplicated set of normalized ingredient tokens.
///
/// Tokens are trimmed and lowercased on entry; insertion order is
/// preserved because it is also the order fed to the model prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for item in raw {
            list.add(item.as_ref());
        }
        list
    }

    /// Trims and lowercases `raw`; no-op when the result is empty or
    /// already present.
    pub fn add(&mut self, raw: &str) {
        let token = raw.trim().to_lowercase();
        if token.is_empty() || self.items.iter().any(|t| t == &token) {
            return;
        }
        self.items.push(token);
    }

    pub fn remove(&mut self, token: &str) {
        self.items.retain(|t| t != token);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Comma-joined phrase in insertion order.
    pub fn to_comma_phrase(&self) -> String {
        self.items.join(", ")
    }
}

/// One model-generated recipe. Every field is defaulted on decode: the
/// model is only trusted to return JSON, not to honor the full schema,
/// so absent fields become empty rather than failing the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRecipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default, rename = "cookTime")]
    pub cook_time: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// The decoded suggestion response. Three recipes is a convention of the
/// prompt, not a contract; `recipes` may have any length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    #[serde(default)]
    pub recipes: Vec<SuggestedRecipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_and_deduplicate_tokens() {
        let mut list = IngredientList::new();
        list.add("Chicken");
        list.add("chicken ");

        assert_eq!(list.as_slice(), ["chicken"]);
    }

    #[test]
    fn should_ignore_blank_tokens() {
        let mut list = IngredientList::new();
        list.add("   ");
        list.add("");

        assert!(list.is_empty());
    }

    #[test]
    fn should_preserve_insertion_order() {
        let list = IngredientList::from_raw(["chicken", "rice", "soy sauce"]);
        assert_eq!(list.to_comma_phrase(), "chicken, rice, soy sauce");
    }

    #[test]
    fn should_remove_present_token_and_ignore_absent_one() {
        let mut list = IngredientList::from_raw(["chicken", "rice"]);
        list.remove("rice");
        list.remove("tofu");

        assert_eq!(list.as_slice(), ["chicken"]);
    }

    #[test]
    fn should_default_missing_recipe_fields_on_decode() {
        let recipe: SuggestedRecipe = serde_json::from_str(r#"{"name":"Nasi Goreng"}"#).unwrap();

        assert_eq!(recipe.name, "Nasi Goreng");
        assert!(recipe.cuisine.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn should_decode_cook_time_from_camel_case() {
        let recipe: SuggestedRecipe = serde_json::from_str(r#"{"cookTime":"30 mins"}"#).unwrap();
        assert_eq!(recipe.cook_time, "30 mins");
    }

    #[test]
    fn should_default_recipes_to_empty_when_absent() {
        let payload: SuggestionPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.recipes.is_empty());
    }
}
