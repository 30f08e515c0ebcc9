pub mod model;
pub mod service;

pub use model::{LoginRequest, PersistedIdentity, RegisterRequest, SessionError, SessionPhase};
pub use service::{SESSION_KEY, SessionStore, identity_for_email, mock_ids};
