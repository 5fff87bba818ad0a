use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    Malaysian,
    Indonesian,
    Korean,
    Japanese,
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cuisine::Malaysian => write!(f, "malaysian"),
            Cuisine::Indonesian => write!(f, "indonesian"),
            Cuisine::Korean => write!(f, "korean"),
            Cuisine::Japanese => write!(f, "japanese"),
        }
    }
}

impl std::str::FromStr for Cuisine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "malaysian" => Ok(Cuisine::Malaysian),
            "indonesian" => Ok(Cuisine::Indonesian),
            "korean" => Ok(Cuisine::Korean),
            "japanese" => Ok(Cuisine::Japanese),
            _ => Err(format!("Invalid cuisine: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    LunchDinner,
    Snacks,
    Desserts,
    Drinks,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::LunchDinner => write!(f, "lunch_dinner"),
            MealType::Snacks => write!(f, "snacks"),
            MealType::Desserts => write!(f, "desserts"),
            MealType::Drinks => write!(f, "drinks"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch_dinner" => Ok(MealType::LunchDinner),
            "snacks" => Ok(MealType::Snacks),
            "desserts" => Ok(MealType::Desserts),
            "drinks" => Ok(MealType::Drinks),
            _ => Err(format!("Invalid meal type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    None,
    Mild,
    Medium,
    Spicy,
    VerySpicy,
}

impl std::fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpiceLevel::None => write!(f, "none"),
            SpiceLevel::Mild => write!(f, "mild"),
            SpiceLevel::Medium => write!(f, "medium"),
            SpiceLevel::Spicy => write!(f, "spicy"),
            SpiceLevel::VerySpicy => write!(f, "very_spicy"),
        }
    }
}

impl std::str::FromStr for SpiceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SpiceLevel::None),
            "mild" => Ok(SpiceLevel::Mild),
            "medium" => Ok(SpiceLevel::Medium),
            "spicy" => Ok(SpiceLevel::Spicy),
            "very_spicy" => Ok(SpiceLevel::VerySpicy),
            _ => Err(format!("Invalid spice level: {}", s)),
        }
    }
}

/// Filter criteria for the public recipe catalogue. Empty vectors and
/// false flags mean "no restriction".
#[derive(Debug, Clone, Default)]
pub struct RecipeFilters {
    pub cuisines: Vec<Cuisine>,
    pub meal_types: Vec<MealType>,
    pub spice_levels: Vec<SpiceLevel>,
    pub vegetarian: bool,
    pub vegan: bool,
    pub halal: bool,
    pub gluten_free: bool,
    /// Case-insensitive substring match on the recipe title.
    pub search: Option<String>,
}
