//! Route definitions for file uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload routes mounted at `/uploads`.
///
/// ```text
/// POST /image -> upload_image (auth, multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/image", post(uploads::upload_image))
}
