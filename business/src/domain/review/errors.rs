#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.invalid_rating")]
    InvalidRating,
    #[error("review.not_found")]
    NotFound,
    #[error("review.not_owner")]
    NotOwner,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
