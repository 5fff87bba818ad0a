#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
