//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, mail, hashed_password, created_at";

/// Lookup and provisioning operations for the author account.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by login, matching either username or mail.
    pub async fn find_by_login(pool: &PgPool, login: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1 OR mail = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the author account at startup.
    ///
    /// Credentials come from the environment; re-running with new values
    /// rotates the mail and password hash in place.
    pub async fn ensure_author(
        pool: &PgPool,
        username: &str,
        mail: &str,
        hashed_password: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, mail, hashed_password)
             VALUES ($1, $2, $3)
             ON CONFLICT (username) DO UPDATE
                SET mail = EXCLUDED.mail,
                    hashed_password = EXCLUDED.hashed_password
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(mail)
            .bind(hashed_password)
            .fetch_one(pool)
            .await
    }
}
