//! Auth handlers — register, token exchange, token verification, logout.

use axum::Json;
use axum::extract::{Form, Path, State};
use validator::Validate;

use notebin_core::error::{AppError, ErrorKind};

use crate::dto::request::{RegisterRequest, TokenRequest};
use crate::dto::response::{MessageResponse, TokenResponse, TokenSubjectResponse};
use crate::error::ApiError;
use crate::extractors::BearerToken;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .account_service
        .register(&req.username, &req.password)
        .await?;

    Ok(Json(MessageResponse {
        message: "complete".to_string(),
    }))
}

/// POST /token
///
/// Credential exchange. An unknown username and a wrong password both
/// surface as invalid credentials so the endpoint cannot be used to probe
/// for registered usernames.
pub async fn token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .account_service
        .verify_credentials(&form.username, &form.password)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::NotFound => {
                AppError::invalid_credentials("Incorrect username or password")
            }
            _ => e,
        })?;

    let (access_token, _expires_at) = state.jwt_encoder.issue(&user.username)?;

    Ok(Json(TokenResponse::bearer(access_token)))
}

/// GET /verify-token/{token}
pub async fn verify_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<TokenSubjectResponse>, ApiError> {
    let claims = state.jwt_decoder.verify(&token)?;

    Ok(Json(TokenSubjectResponse {
        username: claims.sub,
    }))
}

/// POST /logout
///
/// Adds the presented token to the revocation set. Idempotent, and the
/// token is not verified first: revoking garbage is harmless.
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    state.jwt_decoder.revoke(&token);

    Ok(Json(MessageResponse {
        message: "Successfully logged out".to_string(),
    }))
}
