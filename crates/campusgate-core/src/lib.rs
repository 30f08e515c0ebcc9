//! # Campusgate Core
//!
//! Foundational types for the campusgate access-control core.
//!
//! - [`errors`]: access-control error types
//! - [`kv`]: key-value persistence abstraction for the session record
//!
//! # Example
//!
//! ```ignore
//! use campusgate_core::errors::AccessError;
//! use campusgate_core::kv::{FileKvStore, KvStore};
//! use std::path::PathBuf;
//!
//! let store = FileKvStore::new(PathBuf::from("./storage/state"));
//! let value = store.get("session/identity.json").await?;
//! ```

pub mod errors;
pub mod kv;

// Re-export commonly used types at crate root
pub use errors::AccessError;
pub use kv::{FileKvStore, KvStore, MemoryKvStore, StoreError};
