use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::{Cuisine, MealType, SpiceLevel};

/// A published recipe from the catalogue. Rows are owned by the external
/// store; this process only reads them, so there is no validating
/// constructor here.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cuisine: Cuisine,
    pub meal_type: MealType,
    pub spice_level: SpiceLevel,
    /// Preparation time in minutes.
    pub prep_time: Option<i32>,
    /// Cooking time in minutes.
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub calories: Option<i32>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_halal: bool,
    pub is_gluten_free: bool,
    /// Only approved recipes are visible on the public surface.
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
