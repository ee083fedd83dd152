//! Authentication extractor

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{constants::roles, error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from the bearer token.
///
/// Any handler taking this as an argument rejects requests without a valid
/// `Authorization: Bearer <token>` header with a 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    /// Whether the token belongs to an admin account
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let path = parts.uri.path().to_string();

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                debug!(path = %path, "Auth failed: no Authorization header");
                AppError::Unauthorized
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
            AppError::Unauthorized
        })?;

        let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
            debug!(path = %path, error = ?e, "Auth failed: token verification failed");
            e
        })?;

        Ok(AuthenticatedUser {
            id: claims.id,
            username: claims.sub,
            role: claims.role,
        })
    }
}

/// Require the admin role on an authenticated request
pub fn require_admin(user: &AuthenticatedUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Bạn không có quyền truy cập".to_string(),
        ))
    }
}
