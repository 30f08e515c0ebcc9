//! The closed role enumeration and role/department pairing rules.
//!
//! Roles carry no hierarchy. Each protected section declares its own
//! permitted-role set, so there is nothing to inherit between roles.
//!
//! Administrator and rector are global roles; department head, instructor,
//! and student are department-scoped. [`RoleAssignment`] encodes that split
//! as a sum type so a global role can never carry a department reference.

use crate::ids::DepartmentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed privilege levels a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Rector,
    DepartmentHead,
    Instructor,
    Student,
}

impl Role {
    /// The canonical string form used in persisted records and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Rector => "rector",
            Self::DepartmentHead => "department_head",
            Self::Instructor => "instructor",
            Self::Student => "student",
        }
    }

    /// All roles, in no particular order of privilege.
    pub fn all() -> [Role; 5] {
        [
            Self::Administrator,
            Self::Rector,
            Self::DepartmentHead,
            Self::Instructor,
            Self::Student,
        ]
    }

    /// Whether identities with this role may carry a department reference.
    pub fn is_department_scoped(&self) -> bool {
        matches!(self, Self::DepartmentHead | Self::Instructor | Self::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Self::Administrator),
            "rector" => Ok(Self::Rector),
            "department_head" => Ok(Self::DepartmentHead),
            "instructor" => Ok(Self::Instructor),
            "student" => Ok(Self::Student),
            other => Err(RoleError::UnknownRole(other.to_string())),
        }
    }
}

/// Roles that operate across the whole institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalRole {
    Administrator,
    Rector,
}

impl From<GlobalRole> for Role {
    fn from(role: GlobalRole) -> Role {
        match role {
            GlobalRole::Administrator => Role::Administrator,
            GlobalRole::Rector => Role::Rector,
        }
    }
}

/// Roles whose reach is limited to a single department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentRole {
    Head,
    Instructor,
    Student,
}

impl From<DepartmentRole> for Role {
    fn from(role: DepartmentRole) -> Role {
        match role {
            DepartmentRole::Head => Role::DepartmentHead,
            DepartmentRole::Instructor => Role::Instructor,
            DepartmentRole::Student => Role::Student,
        }
    }
}

/// A role paired with its department scope.
///
/// The variant split enforces the invariant that global roles never carry a
/// department. A department-scoped role may still lack a department (e.g., a
/// freshly registered student not yet placed in one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAssignment {
    Global(GlobalRole),
    DepartmentScoped {
        role: DepartmentRole,
        department: Option<DepartmentId>,
    },
}

impl RoleAssignment {
    /// Pair a role with an optional department, rejecting invalid pairings.
    ///
    /// Returns `Err` if a global role (administrator, rector) is given a
    /// department reference.
    pub fn new(role: Role, department: Option<DepartmentId>) -> Result<Self, RoleError> {
        match role {
            Role::Administrator | Role::Rector => {
                if department.is_some() {
                    return Err(RoleError::GlobalRoleWithDepartment(role));
                }
                let global = match role {
                    Role::Administrator => GlobalRole::Administrator,
                    _ => GlobalRole::Rector,
                };
                Ok(Self::Global(global))
            }
            Role::DepartmentHead => Ok(Self::DepartmentScoped {
                role: DepartmentRole::Head,
                department,
            }),
            Role::Instructor => Ok(Self::DepartmentScoped {
                role: DepartmentRole::Instructor,
                department,
            }),
            Role::Student => Ok(Self::DepartmentScoped {
                role: DepartmentRole::Student,
                department,
            }),
        }
    }

    /// The role this assignment grants.
    pub fn role(&self) -> Role {
        match self {
            Self::Global(role) => (*role).into(),
            Self::DepartmentScoped { role, .. } => (*role).into(),
        }
    }

    /// The department this assignment is scoped to, if any.
    pub fn department(&self) -> Option<DepartmentId> {
        match self {
            Self::Global(_) => None,
            Self::DepartmentScoped { department, .. } => *department,
        }
    }
}

/// Error type for role parsing and pairing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The role name is not one of the fixed enumeration values.
    UnknownRole(String),

    /// A global role was paired with a department reference.
    GlobalRoleWithDepartment(Role),
}

impl std::error::Error for RoleError {}

impl fmt::Display for RoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRole(name) => write!(f, "Unknown role: {}", name),
            Self::GlobalRoleWithDepartment(role) => {
                write!(f, "Global role '{}' cannot carry a department", role)
            }
        }
    }
}
