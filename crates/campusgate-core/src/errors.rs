//! Access-control error types.

use std::fmt;

/// Errors raised by the section registry and its consumers.
///
/// All of these indicate a configuration or programming defect, not a
/// user-facing runtime condition. An unauthorized navigation attempt is a
/// normal outcome and is never represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A section was queried that is absent from the registry. Signals a
    /// registry/guard mismatch; callers must only query registered sections.
    UnknownSection(String),

    /// Two registry entries share the same section identifier.
    DuplicateSection(String),

    /// A section was declared with an empty permitted-role set, making it
    /// unreachable by any role.
    EmptyAllowedRoles(String),
}

impl std::error::Error for AccessError {}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSection(id) => write!(f, "Unknown section: '{}'", id),
            Self::DuplicateSection(id) => write!(f, "Duplicate section in registry: '{}'", id),
            Self::EmptyAllowedRoles(id) => {
                write!(f, "Section '{}' permits no roles and is unreachable", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccessError::UnknownSection("garage".to_string());
        assert_eq!(format!("{}", err), "Unknown section: 'garage'");

        let err = AccessError::EmptyAllowedRoles("grades".to_string());
        assert!(format!("{}", err).contains("unreachable"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<AccessError>();
    }
}
