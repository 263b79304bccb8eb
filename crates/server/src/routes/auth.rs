//! Registration and login endpoints.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Request body for POST /api/register and POST /api/login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response body carrying a freshly issued access token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub access_token: String,
}

fn require_fields(credentials: &Credentials) -> Result<()> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_owned(),
        ));
    }
    Ok(())
}

/// POST /api/register
///
/// Create an account and issue an access token. Duplicate registration,
/// malformed email, and short passwords are 400s.
#[instrument(skip(state, credentials))]
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>> {
    require_fields(&credentials)?;

    let auth = AuthService::new(state.accounts(), state.sessions());
    let access_token = auth.register(&credentials.email, &credentials.password)?;

    Ok(Json(TokenResponse {
        success: true,
        access_token,
    }))
}

/// POST /api/login
///
/// Verify credentials and issue a fresh access token. Unknown users and
/// wrong passwords both yield 401 with the same message.
#[instrument(skip(state, credentials))]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>> {
    require_fields(&credentials)?;

    let auth = AuthService::new(state.accounts(), state.sessions());
    let access_token = auth.login(&credentials.email, &credentials.password)?;

    Ok(Json(TokenResponse {
        success: true,
        access_token,
    }))
}
