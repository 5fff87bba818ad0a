use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReviewError;
use crate::domain::shared::value_objects::UserId;

/// A user's rating and optional comment on one recipe. One review per
/// user per recipe; submitting again replaces the previous one.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
    /// Reviewer display name, present when the row was joined with the
    /// profile table.
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewReviewProps {
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
}

impl Review {
    pub fn new(props: NewReviewProps) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&props.rating) {
            return Err(ReviewError::InvalidRating);
        }

        let comment = props
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            id: Uuid::new_v4(),
            recipe_id: props.recipe_id,
            user_id: props.user_id,
            rating: props.rating,
            comment,
            username: None,
            created_at: Utc::now(),
        })
    }

    /// Constructor for rows already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        recipe_id: Uuid,
        user_id: UserId,
        rating: i32,
        comment: Option<String>,
        username: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipe_id,
            user_id,
            rating,
            comment,
            username,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(rating: i32, comment: Option<&str>) -> NewReviewProps {
        NewReviewProps {
            recipe_id: Uuid::new_v4(),
            user_id: UserId::new("reviewer"),
            rating,
            comment: comment.map(|c| c.to_string()),
        }
    }

    #[test]
    fn should_accept_ratings_between_one_and_five() {
        for rating in 1..=5 {
            assert!(Review::new(props(rating, None)).is_ok());
        }
    }

    #[test]
    fn should_reject_out_of_range_ratings() {
        assert!(matches!(
            Review::new(props(0, None)),
            Err(ReviewError::InvalidRating)
        ));
        assert!(matches!(
            Review::new(props(6, None)),
            Err(ReviewError::InvalidRating)
        ));
    }

    #[test]
    fn should_drop_blank_comments() {
        let review = Review::new(props(4, Some("   "))).unwrap();
        assert!(review.comment.is_none());
    }

    #[test]
    fn should_trim_comments() {
        let review = Review::new(props(4, Some("  great sambal  "))).unwrap();
        assert_eq!(review.comment.as_deref(), Some("great sambal"));
    }
}
