use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::review::errors::ReviewError;
use business::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use business::domain::review::use_cases::get_by_recipe::{GetReviewsParams, GetReviewsUseCase};
use business::domain::review::use_cases::submit::{SubmitReviewParams, SubmitReviewUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::review::dto::{ReviewResponse, SubmitReviewRequest};
use crate::api::security::AuthUser;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    get_use_case: Arc<dyn GetReviewsUseCase>,
    submit_use_case: Arc<dyn SubmitReviewUseCase>,
    delete_use_case: Arc<dyn DeleteReviewUseCase>,
}

impl ReviewApi {
    pub fn new(
        get_use_case: Arc<dyn GetReviewsUseCase>,
        submit_use_case: Arc<dyn SubmitReviewUseCase>,
        delete_use_case: Arc<dyn DeleteReviewUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            submit_use_case,
            delete_use_case,
        }
    }
}

/// Review API
///
/// Ratings and comments on recipes. One review per user per recipe;
/// submitting again replaces the previous one.
#[OpenApi]
impl ReviewApi {
    /// List reviews for a recipe
    ///
    /// Public; newest first.
    #[oai(
        path = "/recipes/:id/reviews",
        method = "get",
        tag = "ApiTags::Reviews"
    )]
    async fn get_reviews(&self, id: Path<Uuid>) -> GetReviewsResponse {
        match self
            .get_use_case
            .execute(GetReviewsParams { recipe_id: id.0 })
            .await
        {
            Ok(reviews) => {
                let responses: Vec<ReviewResponse> =
                    reviews.into_iter().map(|r| r.into()).collect();
                GetReviewsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetReviewsResponse::InternalError(json)
            }
        }
    }

    /// Submit a review
    ///
    /// Creates the caller's review of this recipe, or replaces their
    /// previous one.
    #[oai(
        path = "/recipes/:id/reviews",
        method = "put",
        tag = "ApiTags::Reviews"
    )]
    async fn submit_review(
        &self,
        auth: AuthUser,
        id: Path<Uuid>,
        body: Json<SubmitReviewRequest>,
    ) -> SubmitReviewResponse {
        let request = body.0;

        match self
            .submit_use_case
            .execute(SubmitReviewParams {
                recipe_id: id.0,
                user_id: UserId::new(&auth.0),
                rating: request.rating,
                comment: request.comment,
            })
            .await
        {
            Ok(review) => SubmitReviewResponse::Ok(Json(review.into())),
            Err(err @ ReviewError::InvalidRating) => {
                let (_, json) = err.into_error_response();
                SubmitReviewResponse::BadRequest(json)
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                SubmitReviewResponse::InternalError(json)
            }
        }
    }

    /// Delete a review
    ///
    /// Only the author may delete their review.
    #[oai(path = "/reviews/:id", method = "delete", tag = "ApiTags::Reviews")]
    async fn delete_review(&self, auth: AuthUser, id: Path<Uuid>) -> DeleteReviewResponse {
        match self
            .delete_use_case
            .execute(DeleteReviewParams {
                id: id.0,
                user_id: UserId::new(&auth.0),
            })
            .await
        {
            Ok(()) => DeleteReviewResponse::NoContent,
            Err(err @ ReviewError::NotOwner) => {
                let (_, json) = err.into_error_response();
                DeleteReviewResponse::Forbidden(json)
            }
            Err(err @ ReviewError::NotFound) => {
                let (_, json) = err.into_error_response();
                DeleteReviewResponse::NotFound(json)
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                DeleteReviewResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitReviewResponse {
    #[oai(status = 200)]
    Ok(Json<ReviewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteReviewResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
