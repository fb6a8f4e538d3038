//! JWT token validation and revocation checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use notebin_core::config::auth::AuthConfig;
use notebin_core::error::AppError;

use super::claims::Claims;
use super::revocation::RevocationSet;

/// Validates bearer tokens and checks revocation status.
///
/// Verification is pure computation; no I/O is performed.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Revocation set consulted on every verify.
    revocation: Arc<RevocationSet>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, revocation: Arc<RevocationSet>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock-skew leeway: expiry is authoritative.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            revocation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks, in order:
    /// 1. Signature validity and payload shape
    /// 2. Expiration
    /// 3. Absence from the revocation set
    ///
    /// Every failure mode collapses to a single invalid-token error; the
    /// caller learns nothing about which check rejected the token.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::invalid_token("Token is invalid or expired"))?;

        if self.revocation.contains(token) {
            return Err(AppError::invalid_token("Token is invalid or expired"));
        }

        Ok(token_data.claims)
    }

    /// Adds a token to the revocation set. Idempotent; affects only
    /// subsequent `verify` calls.
    pub fn revoke(&self, token: &str) {
        self.revocation.revoke(token);
    }
}
