use poem_openapi::Object;

use business::domain::suggestion::model::SuggestedRecipe;

/// The ingredients field is accepted as loose JSON so that a missing or
/// non-array value degrades to an empty list, which the use case turns
/// into the single-field 400 body instead of a framework parse error.
#[derive(Debug, Clone, Object)]
pub struct SuggestionRequest {
    /// Raw ingredient names; blanks, duplicates and non-string entries
    /// are dropped server-side
    #[oai(default)]
    pub ingredients: serde_json::Value,
}

impl SuggestionRequest {
    pub fn ingredient_strings(&self) -> Vec<String> {
        self.ingredients
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestedRecipeResponse {
    /// Recipe name
    pub name: String,
    /// Brief description of the dish
    pub description: String,
    /// Cuisine the model picked (Malaysian, Indonesian, Korean or Japanese)
    pub cuisine: String,
    /// Free-form cooking time, e.g. "30 mins"
    #[oai(rename = "cookTime")]
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<SuggestedRecipe> for SuggestedRecipeResponse {
    fn from(r: SuggestedRecipe) -> Self {
        Self {
            name: r.name,
            description: r.description,
            cuisine: r.cuisine,
            cook_time: r.cook_time,
            ingredients: r.ingredients,
            instructions: r.instructions,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionListResponse {
    pub recipes: Vec<SuggestedRecipeResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_collect_string_ingredients() {
        let request = SuggestionRequest {
            ingredients: json!(["chicken", "rice"]),
        };

        assert_eq!(request.ingredient_strings(), ["chicken", "rice"]);
    }

    #[test]
    fn should_treat_non_array_ingredients_as_empty() {
        for value in [json!("chicken"), json!(42), json!({"a": 1}), json!(null)] {
            let request = SuggestionRequest { ingredients: value };
            assert!(request.ingredient_strings().is_empty());
        }
    }

    #[test]
    fn should_drop_non_string_entries() {
        let request = SuggestionRequest {
            ingredients: json!(["chicken", 42, null, "rice"]),
        };

        assert_eq!(request.ingredient_strings(), ["chicken", "rice"]);
    }
}
