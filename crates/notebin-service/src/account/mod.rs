//! Account registration and credential verification.

pub mod service;

pub use service::AccountService;
