#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
