use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::bookmark::use_cases::get_all::{GetBookmarksParams, GetBookmarksUseCase};
use business::domain::bookmark::use_cases::is_bookmarked::{
    IsBookmarkedParams, IsBookmarkedUseCase,
};
use business::domain::bookmark::use_cases::toggle::{ToggleBookmarkParams, ToggleBookmarkUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::bookmark::dto::{BookmarkStateResponse, BookmarkedRecipeResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AuthUser;
use crate::api::tags::ApiTags;

pub struct BookmarkApi {
    get_all_use_case: Arc<dyn GetBookmarksUseCase>,
    is_bookmarked_use_case: Arc<dyn IsBookmarkedUseCase>,
    toggle_use_case: Arc<dyn ToggleBookmarkUseCase>,
}

impl BookmarkApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetBookmarksUseCase>,
        is_bookmarked_use_case: Arc<dyn IsBookmarkedUseCase>,
        toggle_use_case: Arc<dyn ToggleBookmarkUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            is_bookmarked_use_case,
            toggle_use_case,
        }
    }
}

/// Bookmark API
///
/// The caller's saved recipes. All endpoints require authentication and
/// act on the caller's own bookmarks only.
#[OpenApi]
impl BookmarkApi {
    /// List bookmarked recipes
    ///
    /// Returns the caller's bookmarks joined with their recipes, most
    /// recently bookmarked first.
    #[oai(path = "/bookmarks", method = "get", tag = "ApiTags::Bookmarks")]
    async fn get_bookmarks(&self, auth: AuthUser) -> GetBookmarksResponse {
        match self
            .get_all_use_case
            .execute(GetBookmarksParams {
                user_id: UserId::new(&auth.0),
            })
            .await
        {
            Ok(bookmarks) => {
                let responses: Vec<BookmarkedRecipeResponse> =
                    bookmarks.into_iter().map(|b| b.into()).collect();
                GetBookmarksResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetBookmarksResponse::InternalError(json)
            }
        }
    }

    /// Check one bookmark
    ///
    /// Returns whether the caller has bookmarked this recipe.
    #[oai(
        path = "/bookmarks/:recipe_id",
        method = "get",
        tag = "ApiTags::Bookmarks"
    )]
    async fn is_bookmarked(&self, auth: AuthUser, recipe_id: Path<Uuid>) -> BookmarkStateApiResponse {
        match self
            .is_bookmarked_use_case
            .execute(IsBookmarkedParams {
                user_id: UserId::new(&auth.0),
                recipe_id: recipe_id.0,
            })
            .await
        {
            Ok(bookmarked) => {
                BookmarkStateApiResponse::Ok(Json(BookmarkStateResponse { bookmarked }))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                BookmarkStateApiResponse::InternalError(json)
            }
        }
    }

    /// Toggle one bookmark
    ///
    /// Bookmarks the recipe when absent, removes the bookmark when
    /// present, and returns the resulting state.
    #[oai(
        path = "/bookmarks/:recipe_id",
        method = "put",
        tag = "ApiTags::Bookmarks"
    )]
    async fn toggle_bookmark(
        &self,
        auth: AuthUser,
        recipe_id: Path<Uuid>,
    ) -> BookmarkStateApiResponse {
        match self
            .toggle_use_case
            .execute(ToggleBookmarkParams {
                user_id: UserId::new(&auth.0),
                recipe_id: recipe_id.0,
            })
            .await
        {
            Ok(bookmarked) => {
                BookmarkStateApiResponse::Ok(Json(BookmarkStateResponse { bookmarked }))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                BookmarkStateApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBookmarksResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BookmarkedRecipeResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BookmarkStateApiResponse {
    #[oai(status = 200)]
    Ok(Json<BookmarkStateResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
