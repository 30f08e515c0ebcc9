//! # Campusgate Models
//!
//! Domain types for the campusgate access-control core.
//!
//! This crate contains the data shapes shared by the session store, the
//! route guard, and the navigation filter:
//!
//! - [`ids`]: strongly-typed ID newtypes (`UserId`, `DepartmentId`)
//! - [`value_types`]: validated value types (`Email`)
//! - [`roles`]: the closed role enumeration and role/department pairing rules
//! - [`identity`]: the authenticated principal
//! - [`sections`]: protected navigable sections and their permitted roles

pub mod identity;
pub mod ids;
pub mod roles;
pub mod sections;
pub mod value_types;

// Re-export commonly used types at crate root
pub use identity::Identity;
pub use ids::{DepartmentId, UserId};
pub use roles::{DepartmentRole, GlobalRole, Role, RoleAssignment, RoleError};
pub use sections::SectionEntry;
pub use value_types::Email;
