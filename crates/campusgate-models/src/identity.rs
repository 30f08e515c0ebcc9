//! The authenticated principal.

use crate::ids::{DepartmentId, UserId};
use crate::roles::{Role, RoleAssignment, RoleError};
use crate::value_types::Email;

/// The attributes of an authenticated principal.
///
/// Created on successful login or registration, held exclusively by the
/// session store for the duration of the session, and destroyed on logout.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub assignment: RoleAssignment,
}

impl Identity {
    /// Build an identity, validating the role/department pairing.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: Email,
        role: Role,
        department: Option<DepartmentId>,
    ) -> Result<Self, RoleError> {
        Ok(Self {
            id,
            name: name.into(),
            email,
            assignment: RoleAssignment::new(role, department)?,
        })
    }

    /// The role this identity holds.
    pub fn role(&self) -> Role {
        self.assignment.role()
    }

    /// The department this identity is scoped to, if any.
    pub fn department(&self) -> Option<DepartmentId> {
        self.assignment.department()
    }
}
