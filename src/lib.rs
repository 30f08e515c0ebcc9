//! # Campusgate
//!
//! The access-control core of a role-based college management dashboard:
//! a session store, a static role→permission table, a route guard, and a
//! navigation filter.
//!
//! ## Overview
//!
//! The session store is the single source of truth for "who is logged in".
//! The route guard and the navigation filter read it, together with the
//! section registry, and never mutate it:
//!
//! ```text
//! SessionStore ──snapshot──▶ RouteGuard ──▶ Allowed / redirect
//!      │                         │
//!      │                   SectionRegistry
//!      │                         │
//!      └────snapshot──────▶ NavigationFilter ──▶ visible entries
//! ```
//!
//! Because guard and filter consult the same registry, the navigation
//! sidebar can never show a section the guard would refuse, and vice versa.
//!
//! ## Roles
//!
//! | Role | Scope |
//! |------|-------|
//! | Administrator | Global |
//! | Rector | Global |
//! | Department Head | Department |
//! | Instructor | Department |
//! | Student | Department (optional) |
//!
//! Roles form no hierarchy: every section declares its own permitted-role
//! set explicitly.
//!
//! ## Sessions
//!
//! Login and registration resolve identities from the email's contents; no
//! real credential verification exists in this system, and none is
//! pretended. The established identity is persisted as a single record in a
//! key-value store and read back once at startup by
//! [`modules::session::SessionStore::restore`]. A missing or malformed
//! record simply means "no session".
//!
//! ## Modules
//!
//! - [`logging`]: tracing setup
//! - [`modules`]: session store, route guard, navigation filter
//! - [`registry`]: the section registry and the default dashboard table
//! - [`state`]: shared application state

pub mod logging;
pub mod modules;
pub mod registry;
pub mod state;

// Re-export workspace crates for convenience
pub use campusgate_config;
pub use campusgate_core;
pub use campusgate_models;
