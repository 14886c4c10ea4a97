//! Article field constants and submission validation.

use crate::error::CoreError;

/// Author name written to articles created without an explicit author.
pub const DEFAULT_AUTHOR: &str = "KeykoMI";

/// Image URL substituted into API responses when an article has none.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-article.jpg";

/// Validate that an article title is non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}

/// Validate that article content is non-empty after trimming.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("content must not be empty".into()));
    }
    Ok(())
}

/// Resolve the author field for a create payload: a present, non-blank
/// value wins, otherwise [`DEFAULT_AUTHOR`].
pub fn resolve_author(author: Option<&str>) -> String {
    match author {
        Some(a) if !a.trim().is_empty() => a.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}
