//! Session data shapes: phases, request DTOs, the persisted record, and
//! session errors.

use campusgate_core::kv::StoreError;
use campusgate_models::identity::Identity;
use campusgate_models::ids::{DepartmentId, UserId};
use campusgate_models::roles::{Role, RoleError};
use campusgate_models::value_types::Email;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// The session's externally observable state.
///
/// `Authenticated` carries the identity directly, so "authenticated is true
/// if and only if an identity is present" holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// An asynchronous login, registration, or startup restore is in
    /// flight. Consumers must wait rather than commit to allow or deny.
    Settling,
    /// No identity is held.
    Anonymous,
    /// An identity is established.
    Authenticated(Identity),
}

impl SessionPhase {
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The held identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// The held identity's role, if any.
    pub fn role(&self) -> Option<Role> {
        self.identity().map(Identity::role)
    }
}

/// DTO for a login attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: Email,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// DTO for a registration attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub email: Email,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// The single serialized record written to the key-value store on login and
/// registration, and read back by `restore()` at startup.
///
/// There is no versioning or migration scheme. Anything under the session
/// key that fails to parse, including a record that violates the
/// role/department pairing rules, is treated as "no session".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedIdentity {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(default = "chrono::Utc::now")]
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Identity> for PersistedIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role(),
            department_id: identity.department(),
            issued_at: chrono::Utc::now(),
        }
    }
}

impl TryFrom<PersistedIdentity> for Identity {
    type Error = RoleError;

    fn try_from(record: PersistedIdentity) -> Result<Self, Self::Error> {
        Identity::new(
            record.id,
            record.name,
            record.email,
            record.role,
            record.department_id,
        )
    }
}

/// Errors surfaced by session operations.
///
/// Access-control denials never appear here; an unauthorized navigation is
/// a normal outcome handled by the route guard, not a session failure.
#[derive(Debug)]
pub enum SessionError {
    /// The login/register input failed validation.
    Validation(validator::ValidationErrors),

    /// The key-value store failed.
    Storage(StoreError),

    /// The identity record could not be serialized.
    Serialize(serde_json::Error),

    /// A logout committed while this login/register was in flight; its
    /// result was discarded and the session stays cleared.
    Superseded,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Invalid input: {}", errors),
            Self::Storage(e) => write!(f, "Session storage failed: {}", e),
            Self::Serialize(e) => write!(f, "Could not serialize session record: {}", e),
            Self::Superseded => write!(f, "Sign-in was superseded by a sign-out"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_identity() -> Identity {
        Identity::new(
            UserId::from_u128(3),
            "Department Head",
            Email::new_unchecked("head@example.com"),
            Role::DepartmentHead,
            Some(DepartmentId::from_u128(1)),
        )
        .unwrap()
    }

    #[test]
    fn test_phase_accessors() {
        assert!(SessionPhase::Settling.is_settling());
        assert!(!SessionPhase::Anonymous.is_authenticated());
        assert_eq!(SessionPhase::Anonymous.identity(), None);

        let phase = SessionPhase::Authenticated(head_identity());
        assert!(phase.is_authenticated());
        assert_eq!(phase.role(), Some(Role::DepartmentHead));
    }

    #[test]
    fn test_record_round_trip() {
        let identity = head_identity();
        let record = PersistedIdentity::from(&identity);
        let json = serde_json::to_string(&record).unwrap();

        let parsed: PersistedIdentity = serde_json::from_str(&json).unwrap();
        let restored = Identity::try_from(parsed).unwrap();
        assert_eq!(restored, identity);
    }

    #[test]
    fn test_record_without_department_or_timestamp_parses() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000005",
            "name": "Student User",
            "email": "student@example.com",
            "role": "student"
        }"#;
        let record: PersistedIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(record.department_id, None);

        let identity = Identity::try_from(record).unwrap();
        assert_eq!(identity.role(), Role::Student);
        assert_eq!(identity.department(), None);
    }

    #[test]
    fn test_record_with_global_role_and_department_is_rejected() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Admin User",
            "email": "admin@example.com",
            "role": "administrator",
            "department_id": "00000000-0000-0000-0000-000000000001"
        }"#;
        let record: PersistedIdentity = serde_json::from_str(json).unwrap();
        assert!(Identity::try_from(record).is_err());
    }

    #[test]
    fn test_record_with_unknown_role_fails_to_parse() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Someone",
            "email": "someone@example.com",
            "role": "janitor"
        }"#;
        let result: Result<PersistedIdentity, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: Email::new_unchecked("user@example.com"),
            password: "x".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LoginRequest {
            email: Email::new_unchecked("user@example.com"),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let empty_name = RegisterRequest {
            name: "".to_string(),
            email: Email::new_unchecked("user@example.com"),
            password: "x".to_string(),
        };
        assert!(empty_name.validate().is_err());
    }
}
