//! Handler for the `/auth` resource (login).
//!
//! There is a single author account and no refresh flow: token expiry
//! forces a fresh login.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use webblog_core::error::CoreError;
use webblog_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth/login`. `login` matches the author's
/// username or mail address.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub username: String,
    pub mail: String,
}

/// POST /api/auth/login
///
/// Authenticate with login (username or mail) + password. The failure
/// message never reveals which of the two fields was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_login(&state.pool, &input.login)
        .await?
        .ok_or_else(|| {
            tracing::warn!(login = %input.login, "Login attempt for unknown account");
            AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.hashed_password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(login = %input.login, "Failed login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let access_token = generate_access_token(&user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %user.username, "Author logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expiry_mins * 60,
        username: user.username,
        mail: user.mail,
    }))
}
