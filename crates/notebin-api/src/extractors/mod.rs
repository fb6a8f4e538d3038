//! Custom Axum extractors.

pub mod auth;
pub mod range;

pub use auth::{AuthUser, BearerToken};
pub use range::ListParams;
