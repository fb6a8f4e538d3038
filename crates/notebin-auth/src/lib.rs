//! # notebin-auth
//!
//! Authentication building blocks for Notebin.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation, validation, and the in-memory revocation set
//! - `password` — Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, RevocationSet};
pub use password::PasswordHasher;
