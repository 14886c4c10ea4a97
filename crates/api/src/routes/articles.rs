//! Route definitions for the article resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes mounted at `/articles`.
///
/// ```text
/// GET    /                      -> list_articles
/// POST   /                      -> create_article (auth)
/// GET    /all                   -> list_all_articles
/// GET    /search                -> search_articles
/// GET    /{id}                  -> get_article
/// PUT    /{id}                  -> update_article (auth)
/// PATCH  /{id}                  -> patch_article (auth)
/// DELETE /{id}                  -> delete_article (auth)
/// POST   /{id}/increment-read   -> increment_read_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/all", get(articles::list_all_articles))
        .route("/search", get(articles::search_articles))
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .patch(articles::patch_article)
                .delete(articles::delete_article),
        )
        .route("/{id}/increment-read", post(articles::increment_read_count))
}
