//! Protected navigable sections and their permitted roles.
//!
//! Section identifiers double as route paths. Labels and icon references are
//! presentation metadata carried alongside for navigation rendering; they are
//! not part of the access-control contract.

use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Section identifier constants.
///
/// Use these instead of string literals so registry entries, guard calls, and
/// tests cannot drift apart on spelling.
pub mod section_ids {
    pub const DASHBOARD: &str = "dashboard";
    pub const COLLEGE: &str = "college";
    pub const DEPARTMENTS: &str = "departments";
    pub const FACULTIES: &str = "faculties";
    pub const INSTRUCTORS: &str = "instructors";
    pub const STUDENTS: &str = "students";
    pub const COURSES: &str = "courses";
    pub const CURRICULUM: &str = "curriculum";
    pub const GRADES: &str = "grades";
    pub const STATISTICS: &str = "statistics";
    pub const USERS: &str = "users";
    pub const PROFILE: &str = "profile";

    /// All known section identifiers, in registry order.
    pub fn all() -> [&'static str; 12] {
        [
            DASHBOARD, COLLEGE, DEPARTMENTS, FACULTIES, INSTRUCTORS, STUDENTS, COURSES,
            CURRICULUM, GRADES, STATISTICS, USERS, PROFILE,
        ]
    }
}

/// One registered protected section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Stable identifier; also the route path.
    pub id: String,
    /// Display label for navigation.
    pub label: String,
    /// Icon reference for navigation.
    pub icon: String,
    /// Roles permitted to access this section. Must be non-empty.
    pub allowed_roles: Vec<Role>,
}

impl SectionEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        allowed_roles: impl Into<Vec<Role>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            allowed_roles: allowed_roles.into(),
        }
    }

    /// Whether the given role is in this section's permitted set.
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_allows() {
        let entry = SectionEntry::new(
            section_ids::GRADES,
            "Grades",
            "lucide:bar-chart",
            [Role::Instructor, Role::Student],
        );
        assert!(entry.allows(Role::Instructor));
        assert!(entry.allows(Role::Student));
        assert!(!entry.allows(Role::Administrator));
    }

    #[test]
    fn test_all_ids_are_distinct() {
        use std::collections::HashSet;
        let ids = section_ids::all();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
