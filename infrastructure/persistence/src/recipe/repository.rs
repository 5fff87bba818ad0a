use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::repository::RecipeRepository;
use business::domain::recipe::value_objects::RecipeFilters;

use super::entity::RecipeEntity;

const RECIPE_COLUMNS: &str = "id, title, description, image_url, cuisine, meal_type, spice_level, prep_time, cook_time, servings, calories, ingredients, instructions, is_vegetarian, is_vegan, is_halal, is_gluten_free, is_approved, created_at";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_approved(&self, filters: &RecipeFilters) -> Result<Vec<Recipe>, RepositoryError> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM recipes WHERE is_approved = TRUE",
            RECIPE_COLUMNS
        ));

        if !filters.cuisines.is_empty() {
            let cuisines: Vec<String> = filters.cuisines.iter().map(|c| c.to_string()).collect();
            query.push(" AND cuisine = ANY(");
            query.push_bind(cuisines);
            query.push(")");
        }
        if !filters.meal_types.is_empty() {
            let meal_types: Vec<String> =
                filters.meal_types.iter().map(|m| m.to_string()).collect();
            query.push(" AND meal_type = ANY(");
            query.push_bind(meal_types);
            query.push(")");
        }
        if !filters.spice_levels.is_empty() {
            let spice_levels: Vec<String> =
                filters.spice_levels.iter().map(|s| s.to_string()).collect();
            query.push(" AND spice_level = ANY(");
            query.push_bind(spice_levels);
            query.push(")");
        }
        if filters.vegetarian {
            query.push(" AND is_vegetarian = TRUE");
        }
        if filters.vegan {
            query.push(" AND is_vegan = TRUE");
        }
        if filters.halal {
            query.push(" AND is_halal = TRUE");
        }
        if filters.gluten_free {
            query.push(" AND is_gluten_free = TRUE");
        }
        if let Some(search) = &filters.search {
            query.push(" AND title ILIKE ");
            query.push_bind(format!("%{}%", search));
        }

        query.push(" ORDER BY created_at DESC");

        let entities = query
            .build_query_as::<RecipeEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes WHERE id = $1",
            RECIPE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
