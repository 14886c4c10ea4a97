//! User entity model.
//!
//! There is exactly one user in practice -- the blog author -- but the row
//! lives in a regular table so credentials stay out of the binary.

use sqlx::FromRow;
use webblog_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub mail: String,
    pub hashed_password: String,
    pub created_at: Timestamp,
}
