//! # notebin-service
//!
//! Business logic services for Notebin. Services compose repositories and
//! auth primitives; they never touch the HTTP layer.

pub mod account;
pub mod context;
pub mod item;

pub use account::AccountService;
pub use context::RequestContext;
pub use item::ItemService;
