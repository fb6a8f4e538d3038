//! Bearer token extraction and the `AuthUser` access control extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notebin_core::error::AppError;
use notebin_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The raw bearer token from the `Authorization` header.
///
/// Presence only; the token is not verified. Used by endpoints that
/// operate on the token itself (logout).
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::from(AppError::invalid_credentials("Not authenticated")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::from(AppError::invalid_credentials("Not authenticated")))?;

        Ok(BearerToken(token.to_string()))
    }
}

/// Extracted authenticated user context available in handlers.
///
/// Verifies the bearer token and resolves the subject to a live user
/// row. A token that outlived its account yields not-found rather than a
/// panic or an internal error.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        // Signature, expiry, and revocation checks.
        let claims = state.jwt_decoder.verify(&token)?;

        // The token may outlive the account it was issued for.
        let user = state.account_service.resolve_subject(&claims.sub).await?;

        Ok(AuthUser(RequestContext::new(user.id, user.username)))
    }
}
