//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use notebin_auth::jwt::decoder::JwtDecoder;
use notebin_auth::jwt::encoder::JwtEncoder;
use notebin_core::config::AppConfig;
use notebin_service::account::AccountService;
use notebin_service::item::ItemService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator (owns the revocation set).
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Account registration and credential verification.
    pub account_service: Arc<AccountService>,
    /// Item lifecycle operations.
    pub item_service: Arc<ItemService>,
}
