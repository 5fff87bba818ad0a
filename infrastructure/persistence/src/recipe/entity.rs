use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::recipe::model::Recipe;
use business::domain::recipe::value_objects::{Cuisine, MealType, SpiceLevel};

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cuisine: String,
    pub meal_type: String,
    pub spice_level: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub calories: Option<i32>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_halal: bool,
    pub is_gluten_free: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            cuisine: self
                .cuisine
                .parse::<Cuisine>()
                .unwrap_or(Cuisine::Malaysian),
            meal_type: self
                .meal_type
                .parse::<MealType>()
                .unwrap_or(MealType::LunchDinner),
            spice_level: self
                .spice_level
                .parse::<SpiceLevel>()
                .unwrap_or(SpiceLevel::None),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            calories: self.calories,
            ingredients: self.ingredients,
            instructions: self.instructions,
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            is_halal: self.is_halal,
            is_gluten_free: self.is_gluten_free,
            is_approved: self.is_approved,
            created_at: self.created_at,
        }
    }
}
