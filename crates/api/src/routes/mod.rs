pub mod articles;
pub mod auth;
pub mod health;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
///
/// /articles                         list (public), create (auth)
/// /articles/all                     full list (public)
/// /articles/search                  search (public)
/// /articles/{id}                    get (public); put, patch, delete (auth)
/// /articles/{id}/increment-read     increment read counter (public)
///
/// /uploads/image                    image upload (auth, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/articles", articles::router())
        .nest("/uploads", uploads::router())
}
