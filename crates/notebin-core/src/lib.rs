//! # notebin-core
//!
//! Core crate for Notebin. Contains configuration schemas, list-range
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Notebin crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
