//! Repository for the `articles` table.
//!
//! Tag normalization and author defaulting are applied here, at the write
//! boundary, so every read path can trust the stored form. The read-count
//! increment is a single atomic UPDATE, never a read-modify-write pair.

use sqlx::PgPool;
use webblog_core::article::resolve_author;
use webblog_core::tags;
use webblog_core::types::DbId;

use crate::models::article::{Article, CreateArticle, PatchArticle, UpdateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, image_url, published_at, read_count, tags, author";

/// Provides CRUD, search, and read-count operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    ///
    /// `published_at` and `read_count` are server-assigned; tags are
    /// normalized and the author defaults when absent.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let normalized_tags = tags::normalize(&input.tags);
        let author = resolve_author(input.author.as_deref());

        let query = format!(
            "INSERT INTO articles (title, content, image_url, tags, author)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(&normalized_tags)
            .bind(&author)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of articles, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             ORDER BY published_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every article, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM articles ORDER BY published_at DESC, id DESC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Total number of articles.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await
    }

    /// Full update (PUT semantics). `published_at` and `read_count` are
    /// untouched; a `None` author keeps the stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let normalized_tags = tags::normalize(&input.tags);

        let query = format!(
            "UPDATE articles SET
                title = $2,
                content = $3,
                image_url = $4,
                tags = $5,
                author = COALESCE($6, author)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(&normalized_tags)
            .bind(&input.author)
            .fetch_optional(pool)
            .await
    }

    /// Partial update (PATCH semantics). Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &PatchArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let normalized_tags = input.tags.as_ref().map(|t| tags::normalize(t));

        let query = format!(
            "UPDATE articles SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                image_url = COALESCE($4, image_url),
                tags = COALESCE($5::TEXT[], tags),
                author = COALESCE($6, author)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(&normalized_tags)
            .bind(&input.author)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search against title or any tag,
    /// newest first.
    pub async fn search(
        pool: &PgPool,
        query_str: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let pattern = format!("%{query_str}%");
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE title ILIKE $1
                OR EXISTS (SELECT 1 FROM unnest(tags) AS t WHERE t ILIKE $1)
             ORDER BY published_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of articles matching a search query.
    pub async fn count_search(pool: &PgPool, query_str: &str) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{query_str}%");
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM articles
             WHERE title ILIKE $1
                OR EXISTS (SELECT 1 FROM unnest(tags) AS t WHERE t ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(pool)
        .await
    }

    /// Atomically increment the read counter, returning the new value.
    ///
    /// Returns `None` if no row with the given `id` exists. Concurrent
    /// callers are serialized by the database; the application never reads
    /// the old value first.
    pub async fn increment_read_count(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE articles SET read_count = read_count + 1
             WHERE id = $1
             RETURNING read_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
