//! Bearer-token authentication extractor.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use stylefront_core::Email;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Resolves `Authorization: Bearer <token>` against the session store and
/// yields the owning identity. Rejects with 401 before the handler runs,
/// so no cart mutation is attempted for unauthenticated callers.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(identity): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {identity}!")
/// }
/// ```
pub struct RequireAuth(pub Email);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_owned()))?;

        let identity = state
            .sessions()
            .identity(token)?
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_owned()))?;

        Ok(Self(identity))
    }
}
