//! Strongly-typed ID newtypes for domain entities.
//!
//! This module provides newtype wrappers around `Uuid` for each entity type,
//! preventing accidental misuse of IDs (e.g., passing a `DepartmentId` where
//! a `UserId` is expected).
//!
//! # Example
//!
//! ```ignore
//! use campusgate_models::ids::{UserId, DepartmentId};
//!
//! fn get_user(id: UserId) { /* ... */ }
//!
//! let user_id = UserId::new();
//! let department_id = DepartmentId::new();
//!
//! get_user(user_id);         // OK
//! // get_user(department_id); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a newtype wrapper around `Uuid` with the trait implementations
/// needed for serialization, parsing, and display.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for constants).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Get a reference to the inner UUID.
            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Create a nil (all zeros) ID.
            #[inline]
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            /// Check if this is a nil ID.
            #[inline]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl AsRef<Uuid> for $name {
            #[inline]
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        // Serde Deserialize - manual impl for transparent UUID deserialization
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

// Define all entity ID types
define_id!(
    /// Strongly-typed ID for user identities.
    UserId
);

define_id!(
    /// Strongly-typed ID for departments.
    DepartmentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = UserId::new();
        assert!(!id.is_nil());
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_id_from_u128() {
        let id = DepartmentId::from_u128(0x00000000_0000_0000_0000_000000000001);
        assert_eq!(
            id.into_inner(),
            Uuid::from_u128(0x00000000_0000_0000_0000_000000000001)
        );
    }

    #[test]
    fn test_id_nil() {
        let id = DepartmentId::nil();
        assert!(id.is_nil());
    }

    #[test]
    fn test_id_debug() {
        let id = UserId::from_u128(0x12345678_1234_1234_1234_123456789abc);
        let debug = format!("{:?}", id);
        assert!(debug.starts_with("UserId("));
        assert!(debug.contains("12345678-1234-1234-1234-123456789abc"));
    }

    #[test]
    fn test_id_display() {
        let uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc);
        let id = DepartmentId::from_uuid(uuid);
        assert_eq!(format!("{}", id), "12345678-1234-1234-1234-123456789abc");
    }

    #[test]
    fn test_id_from_str() {
        let id: UserId = "12345678-1234-1234-1234-123456789abc".parse().unwrap();
        assert_eq!(
            id.into_inner(),
            Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc)
        );
    }

    #[test]
    fn test_id_from_str_invalid() {
        let result: Result<UserId, _> = "invalid-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_serialize() {
        let id = UserId::from_u128(0x12345678_1234_1234_1234_123456789abc);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""12345678-1234-1234-1234-123456789abc""#);
    }

    #[test]
    fn test_id_deserialize() {
        let json = r#""12345678-1234-1234-1234-123456789abc""#;
        let id: DepartmentId = serde_json::from_str(json).unwrap();
        assert_eq!(
            id.into_inner(),
            Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc)
        );
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let id1 = UserId::new();
        let id2 = UserId::new();
        set.insert(id1);
        set.insert(id2);
        assert_eq!(set.len(), 2);
        set.insert(id1); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_conversion_roundtrip() {
        let original_uuid = Uuid::new_v4();
        let id: UserId = original_uuid.into();
        let recovered_uuid: Uuid = id.into();
        assert_eq!(original_uuid, recovered_uuid);
    }
}
