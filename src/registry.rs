//! The section registry: the ordered list of protected sections and the
//! roles permitted to access each.
//!
//! The registry is the single permission table both the route guard and the
//! navigation filter consult, which is what keeps "what the sidebar shows"
//! and "what the guard allows" from drifting apart.

use std::collections::HashMap;

use campusgate_core::errors::AccessError;
use campusgate_models::roles::Role;
use campusgate_models::sections::{SectionEntry, section_ids};

/// Default landing section for authenticated users, and the soft-fallback
/// target for unauthorized navigation attempts.
pub const DEFAULT_SECTION: &str = section_ids::DASHBOARD;

/// An ordered, validated collection of [`SectionEntry`] records.
///
/// Insertion order is preserved; the navigation filter presents entries in
/// exactly this order. Construction fails on duplicate identifiers and on
/// entries with an empty permitted-role set, so misconfiguration is caught
/// at startup rather than as a per-user denial at runtime.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
    index: HashMap<String, usize>,
}

impl SectionRegistry {
    /// Build a registry from entries, validating it.
    pub fn from_entries(entries: Vec<SectionEntry>) -> Result<Self, AccessError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.allowed_roles.is_empty() {
                return Err(AccessError::EmptyAllowedRoles(entry.id.clone()));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(AccessError::DuplicateSection(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// The registered sections, in declaration order.
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Look up a section by identifier.
    pub fn get(&self, section: &str) -> Option<&SectionEntry> {
        self.index.get(section).map(|&position| &self.entries[position])
    }

    /// Whether `role` may access `section`.
    ///
    /// Querying a section absent from the registry is a configuration error,
    /// not a deny: it returns `Err` rather than `Ok(false)`.
    pub fn can_access(&self, role: Role, section: &str) -> Result<bool, AccessError> {
        self.get(section)
            .map(|entry| entry.allows(role))
            .ok_or_else(|| AccessError::UnknownSection(section.to_string()))
    }
}

/// The college dashboard's section table.
///
/// Ordering matches the navigation sidebar top to bottom.
pub fn default_registry() -> SectionRegistry {
    use Role::*;

    let entries = vec![
        SectionEntry::new(
            section_ids::DASHBOARD,
            "Dashboard",
            "lucide:layout-dashboard",
            [Administrator, Rector, DepartmentHead, Instructor, Student],
        ),
        SectionEntry::new(
            section_ids::COLLEGE,
            "College Info",
            "lucide:building",
            [Administrator, Rector],
        ),
        SectionEntry::new(
            section_ids::DEPARTMENTS,
            "Departments",
            "lucide:components",
            [Administrator, Rector],
        ),
        SectionEntry::new(
            section_ids::FACULTIES,
            "Faculties",
            "lucide:briefcase",
            [Administrator, Rector],
        ),
        SectionEntry::new(
            section_ids::INSTRUCTORS,
            "Instructors",
            "lucide:users",
            [Administrator, Rector, DepartmentHead],
        ),
        SectionEntry::new(
            section_ids::STUDENTS,
            "Students",
            "lucide:graduation-cap",
            [Administrator, Rector, DepartmentHead, Instructor],
        ),
        SectionEntry::new(
            section_ids::COURSES,
            "Courses",
            "lucide:book-open",
            [Administrator, Rector, DepartmentHead],
        ),
        SectionEntry::new(
            section_ids::CURRICULUM,
            "Curriculum",
            "lucide:calendar",
            [Administrator, Rector, DepartmentHead],
        ),
        SectionEntry::new(
            section_ids::GRADES,
            "Grades",
            "lucide:bar-chart",
            [Instructor, Student],
        ),
        SectionEntry::new(
            section_ids::STATISTICS,
            "Statistics",
            "lucide:pie-chart",
            [Administrator, Rector],
        ),
        SectionEntry::new(
            section_ids::USERS,
            "User Management",
            "lucide:users-2",
            [Administrator],
        ),
        SectionEntry::new(
            section_ids::PROFILE,
            "Profile",
            "lucide:user",
            [Administrator, Rector, DepartmentHead, Instructor, Student],
        ),
    ];

    SectionRegistry::from_entries(entries).expect("default section registry is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_builds() {
        let registry = default_registry();
        assert_eq!(registry.entries().len(), section_ids::all().len());
    }

    #[test]
    fn test_default_registry_covers_all_known_sections_in_order() {
        let registry = default_registry();
        let ids: Vec<&str> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, section_ids::all());
    }

    #[test]
    fn test_default_section_is_registered_and_open_to_all() {
        let registry = default_registry();
        for role in Role::all() {
            assert_eq!(registry.can_access(role, DEFAULT_SECTION), Ok(true));
        }
    }

    #[test]
    fn test_every_section_reachable_by_some_role() {
        // Registry sanity: a section nobody can reach is a config defect
        let registry = default_registry();
        for entry in registry.entries() {
            assert!(
                Role::all().iter().any(|&role| entry.allows(role)),
                "section '{}' is unreachable",
                entry.id
            );
        }
    }

    #[test]
    fn test_can_access_denies_without_error() {
        let registry = default_registry();
        assert_eq!(
            registry.can_access(Role::Student, section_ids::USERS),
            Ok(false)
        );
    }

    #[test]
    fn test_unknown_section_is_an_error_not_a_deny() {
        let registry = default_registry();
        assert_eq!(
            registry.can_access(Role::Administrator, "cafeteria"),
            Err(AccessError::UnknownSection("cafeteria".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_allowed_roles() {
        let entries = vec![SectionEntry::new("orphan", "Orphan", "lucide:ghost", Vec::new())];
        let err = SectionRegistry::from_entries(entries).unwrap_err();
        assert_eq!(err, AccessError::EmptyAllowedRoles("orphan".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_sections() {
        let entries = vec![
            SectionEntry::new("grades", "Grades", "lucide:bar-chart", [Role::Student]),
            SectionEntry::new("grades", "Grades Again", "lucide:bar-chart", [Role::Student]),
        ];
        let err = SectionRegistry::from_entries(entries).unwrap_err();
        assert_eq!(err, AccessError::DuplicateSection("grades".to_string()));
    }
}
