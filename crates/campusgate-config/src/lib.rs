//! # Campusgate Config
//!
//! Configuration types for the campusgate access-control core.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`session`]: session store configuration (state directory, timeouts)
//!
//! # Example
//!
//! ```ignore
//! use campusgate_config::SessionConfig;
//!
//! let session_config = SessionConfig::from_env();
//! ```

pub mod session;

// Re-export commonly used types at crate root
pub use session::SessionConfig;
