//! Handlers for the `/articles` resource.
//!
//! Listing, fetching, and searching are public; creation, update, and
//! deletion require authentication via [`AuthUser`]. The read-count
//! increment is public by design -- the client-side gate is the only
//! deduplication, and the counter is an approximate popularity signal.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use webblog_core::article::{validate_content, validate_title};
use webblog_core::error::CoreError;
use webblog_core::types::DbId;
use webblog_db::models::article::{Article, CreateArticle, PatchArticle, UpdateArticle};
use webblog_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{PageParams, SearchParams};
use crate::response::Paginated;
use crate::state::AppState;

/// GET /api/articles
///
/// One page of articles, newest first.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Article>>> {
    let (page, limit, offset) = params.normalize();

    let total = ArticleRepo::count(&state.pool).await?;
    let articles = ArticleRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(Paginated {
        items: articles
            .into_iter()
            .map(Article::with_placeholder_image)
            .collect(),
        total,
        page,
        limit,
    }))
}

/// GET /api/articles/all
///
/// Every article, newest first, without pagination.
pub async fn list_all_articles(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = ArticleRepo::list_all(&state.pool).await?;

    Ok(Json(
        articles
            .into_iter()
            .map(Article::with_placeholder_image)
            .collect(),
    ))
}

/// GET /api/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    Ok(Json(article.with_placeholder_image()))
}

/// POST /api/articles
///
/// Create an article. Title and content must be non-empty; tags are
/// normalized (lowercase, de-duplicated) before storage.
pub async fn create_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;

    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.id,
        username = %auth.username,
        "Article created",
    );

    Ok((
        StatusCode::CREATED,
        Json(article.with_placeholder_image()),
    ))
}

/// PUT /api/articles/{id}
///
/// Full update. `published_at` and `read_count` are immutable.
pub async fn update_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<Article>> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;

    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    tracing::info!(article_id = id, username = %auth.username, "Article updated");

    Ok(Json(article.with_placeholder_image()))
}

/// PATCH /api/articles/{id}
///
/// Partial update. Provided title/content must still be non-empty.
pub async fn patch_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchArticle>,
) -> AppResult<Json<Article>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let article = ArticleRepo::partial_update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    tracing::info!(article_id = id, username = %auth.username, "Article patched");

    Ok(Json(article.with_placeholder_image()))
}

/// DELETE /api/articles/{id}
pub async fn delete_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ArticleRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }));
    }

    tracing::info!(article_id = id, username = %auth.username, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/articles/search
///
/// Case-insensitive substring match against title or any tag.
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Paginated<Article>>> {
    let q = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("q must not be empty".into()))
        })?;

    let (page, limit, offset) = PageParams {
        page: params.page,
        limit: params.limit,
    }
    .normalize();

    let total = ArticleRepo::count_search(&state.pool, q).await?;
    let articles = ArticleRepo::search(&state.pool, q, limit, offset).await?;

    tracing::debug!(query = %q, total, "Article search");

    Ok(Json(Paginated {
        items: articles
            .into_iter()
            .map(Article::with_placeholder_image)
            .collect(),
        total,
        page,
        limit,
    }))
}

/// POST /api/articles/{id}/increment-read
///
/// Atomically bump the read counter and return the new value. Repeated
/// calls always increment; there is no server-side deduplication.
pub async fn increment_read_count(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let read_count = ArticleRepo::increment_read_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    Ok(Json(json!({ "readCount": read_count })))
}
