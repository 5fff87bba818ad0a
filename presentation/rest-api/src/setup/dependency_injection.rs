use std::sync::Arc;

use logger::TracingLogger;
use persistence::bookmark::repository::BookmarkRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;

use ai_gateway::{GatewayClient, SuggestionGeneratorGateway};

use business::application::bookmark::get_all::GetBookmarksUseCaseImpl;
use business::application::bookmark::is_bookmarked::IsBookmarkedUseCaseImpl;
use business::application::bookmark::toggle::ToggleBookmarkUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::list::ListRecipesUseCaseImpl;
use business::application::review::delete::DeleteReviewUseCaseImpl;
use business::application::review::get_by_recipe::GetReviewsUseCaseImpl;
use business::application::review::submit::SubmitReviewUseCaseImpl;
use business::application::suggestion::suggest::SuggestRecipesUseCaseImpl;

use crate::config::ai_config::AiGatewayConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub review_api: crate::api::review::routes::ReviewApi,
    pub bookmark_api: crate::api::bookmark::routes::BookmarkApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryPostgres::new(pool.clone()));
        let bookmark_repository = Arc::new(BookmarkRepositoryPostgres::new(pool));

        let ai_config = AiGatewayConfig::from_env();
        let gateway_client =
            GatewayClient::new(ai_config.api_key, ai_config.base_url, ai_config.model);
        let suggestion_generator = Arc::new(SuggestionGeneratorGateway::new(gateway_client));

        // Recipe use cases
        let list_recipes_use_case = Arc::new(ListRecipesUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_recipe_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository,
            logger: logger.clone(),
        });

        // Review use cases
        let get_reviews_use_case = Arc::new(GetReviewsUseCaseImpl {
            repository: review_repository.clone(),
            logger: logger.clone(),
        });
        let submit_review_use_case = Arc::new(SubmitReviewUseCaseImpl {
            repository: review_repository.clone(),
            logger: logger.clone(),
        });
        let delete_review_use_case = Arc::new(DeleteReviewUseCaseImpl {
            repository: review_repository,
            logger: logger.clone(),
        });

        // Bookmark use cases
        let get_bookmarks_use_case = Arc::new(GetBookmarksUseCaseImpl {
            repository: bookmark_repository.clone(),
            logger: logger.clone(),
        });
        let is_bookmarked_use_case = Arc::new(IsBookmarkedUseCaseImpl {
            repository: bookmark_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_bookmark_use_case = Arc::new(ToggleBookmarkUseCaseImpl {
            repository: bookmark_repository,
            logger: logger.clone(),
        });

        // Suggestion use cases
        let suggest_recipes_use_case = Arc::new(SuggestRecipesUseCaseImpl {
            generator: suggestion_generator,
            logger,
        });

        let recipe_api = crate::api::recipe::routes::RecipeApi::new(
            list_recipes_use_case,
            get_recipe_use_case,
        );
        let review_api = crate::api::review::routes::ReviewApi::new(
            get_reviews_use_case,
            submit_review_use_case,
            delete_review_use_case,
        );
        let bookmark_api = crate::api::bookmark::routes::BookmarkApi::new(
            get_bookmarks_use_case,
            is_bookmarked_use_case,
            toggle_bookmark_use_case,
        );
        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(suggest_recipes_use_case);

        Self {
            health_api,
            recipe_api,
            review_api,
            bookmark_api,
            suggestion_api,
        }
    }
}
