use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::recipe::model::Recipe;
use business::domain::recipe::value_objects::{Cuisine, MealType, SpiceLevel};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum CuisineDto {
    #[oai(rename = "malaysian")]
    Malaysian,
    #[oai(rename = "indonesian")]
    Indonesian,
    #[oai(rename = "korean")]
    Korean,
    #[oai(rename = "japanese")]
    Japanese,
}

impl From<Cuisine> for CuisineDto {
    fn from(c: Cuisine) -> Self {
        match c {
            Cuisine::Malaysian => CuisineDto::Malaysian,
            Cuisine::Indonesian => CuisineDto::Indonesian,
            Cuisine::Korean => CuisineDto::Korean,
            Cuisine::Japanese => CuisineDto::Japanese,
        }
    }
}

impl From<CuisineDto> for Cuisine {
    fn from(c: CuisineDto) -> Self {
        match c {
            CuisineDto::Malaysian => Cuisine::Malaysian,
            CuisineDto::Indonesian => Cuisine::Indonesian,
            CuisineDto::Korean => Cuisine::Korean,
            CuisineDto::Japanese => Cuisine::Japanese,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum MealTypeDto {
    #[oai(rename = "breakfast")]
    Breakfast,
    #[oai(rename = "lunch_dinner")]
    LunchDinner,
    #[oai(rename = "snacks")]
    Snacks,
    #[oai(rename = "desserts")]
    Desserts,
    #[oai(rename = "drinks")]
    Drinks,
}

impl From<MealType> for MealTypeDto {
    fn from(m: MealType) -> Self {
        match m {
            MealType::Breakfast => MealTypeDto::Breakfast,
            MealType::LunchDinner => MealTypeDto::LunchDinner,
            MealType::Snacks => MealTypeDto::Snacks,
            MealType::Desserts => MealTypeDto::Desserts,
            MealType::Drinks => MealTypeDto::Drinks,
        }
    }
}

impl From<MealTypeDto> for MealType {
    fn from(m: MealTypeDto) -> Self {
        match m {
            MealTypeDto::Breakfast => MealType::Breakfast,
            MealTypeDto::LunchDinner => MealType::LunchDinner,
            MealTypeDto::Snacks => MealType::Snacks,
            MealTypeDto::Desserts => MealType::Desserts,
            MealTypeDto::Drinks => MealType::Drinks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SpiceLevelDto {
    #[oai(rename = "none")]
    None,
    #[oai(rename = "mild")]
    Mild,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "spicy")]
    Spicy,
    #[oai(rename = "very_spicy")]
    VerySpicy,
}

impl From<SpiceLevel> for SpiceLevelDto {
    fn from(s: SpiceLevel) -> Self {
        match s {
            SpiceLevel::None => SpiceLevelDto::None,
            SpiceLevel::Mild => SpiceLevelDto::Mild,
            SpiceLevel::Medium => SpiceLevelDto::Medium,
            SpiceLevel::Spicy => SpiceLevelDto::Spicy,
            SpiceLevel::VerySpicy => SpiceLevelDto::VerySpicy,
        }
    }
}

impl From<SpiceLevelDto> for SpiceLevel {
    fn from(s: SpiceLevelDto) -> Self {
        match s {
            SpiceLevelDto::None => SpiceLevel::None,
            SpiceLevelDto::Mild => SpiceLevel::Mild,
            SpiceLevelDto::Medium => SpiceLevel::Medium,
            SpiceLevelDto::Spicy => SpiceLevel::Spicy,
            SpiceLevelDto::VerySpicy => SpiceLevel::VerySpicy,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Recipe unique identifier
    pub id: Uuid,
    /// Recipe title
    pub title: String,
    /// Brief description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Cover image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub cuisine: CuisineDto,
    pub meal_type: MealTypeDto,
    pub spice_level: SpiceLevelDto,
    /// Preparation time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub prep_time: Option<i32>,
    /// Cooking time in minutes
    #[oai(skip_serializing_if_is_none)]
    pub cook_time: Option<i32>,
    pub servings: i32,
    #[oai(skip_serializing_if_is_none)]
    pub calories: Option<i32>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_halal: bool,
    pub is_gluten_free: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            image_url: r.image_url,
            cuisine: r.cuisine.into(),
            meal_type: r.meal_type.into(),
            spice_level: r.spice_level.into(),
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            servings: r.servings,
            calories: r.calories,
            ingredients: r.ingredients,
            instructions: r.instructions,
            is_vegetarian: r.is_vegetarian,
            is_vegan: r.is_vegan,
            is_halal: r.is_halal,
            is_gluten_free: r.is_gluten_free,
            created_at: r.created_at,
        }
    }
}
