//! Item lifecycle operations.

pub mod service;

pub use service::{ItemRecord, ItemService};
