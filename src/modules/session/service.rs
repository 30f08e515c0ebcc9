//! The session store: the single source of truth for "who is logged in".

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use campusgate_config::SessionConfig;
use campusgate_core::kv::KvStore;
use campusgate_models::identity::Identity;
use campusgate_models::roles::{DepartmentRole, GlobalRole, RoleAssignment};
use campusgate_models::value_types::Email;

use super::model::{LoginRequest, PersistedIdentity, RegisterRequest, SessionError, SessionPhase};

/// The well-known key the identity record is persisted under.
pub const SESSION_KEY: &str = "session/identity.json";

/// Fixed identities issued by the mock resolution step.
///
/// Use these for lookups and assertions instead of hardcoded UUIDs.
pub mod mock_ids {
    use campusgate_models::ids::{DepartmentId, UserId};

    pub const ADMINISTRATOR: UserId = UserId::from_u128(0x00000000_0000_0000_0000_000000000001);
    pub const RECTOR: UserId = UserId::from_u128(0x00000000_0000_0000_0000_000000000002);
    pub const DEPARTMENT_HEAD: UserId = UserId::from_u128(0x00000000_0000_0000_0000_000000000003);
    pub const INSTRUCTOR: UserId = UserId::from_u128(0x00000000_0000_0000_0000_000000000004);
    pub const STUDENT: UserId = UserId::from_u128(0x00000000_0000_0000_0000_000000000005);

    /// The single department the mock backend assigns scoped staff to.
    pub const DEPARTMENT: DepartmentId =
        DepartmentId::from_u128(0x00000000_0000_0000_0000_000000000001);
}

/// Owns the single identity (or none) and the authenticated/settling flags.
///
/// All mutations go through this store; the route guard and navigation
/// filter only ever read snapshots of it. Cheap to clone; clones share
/// state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionState>>,
    store: Arc<dyn KvStore>,
    config: SessionConfig,
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    /// Bumped on every logout. A login or restore resolved against an older
    /// generation is discarded, so a stale result can never resurrect a
    /// cleared session.
    generation: u64,
}

impl SessionStore {
    /// Create a store in the `Settling` phase; call [`restore`] to settle it.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(store: Arc<dyn KvStore>, config: SessionConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                phase: SessionPhase::Settling,
                generation: 0,
            })),
            store,
            config,
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The current phase.
    pub fn snapshot(&self) -> SessionPhase {
        self.state().phase.clone()
    }

    /// Read the persisted identity record and settle the session.
    ///
    /// A missing, malformed, or slow-to-read record all settle to
    /// `Anonymous`; none of them are surfaced as errors or crash startup.
    /// The settling phase ends exactly once, whatever the outcome. A
    /// sign-out that commits while the read is in flight wins; the restored
    /// record is discarded.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> SessionPhase {
        let generation = self.state().generation;
        let read =
            tokio::time::timeout(self.config.restore_timeout(), self.store.get(SESSION_KEY)).await;

        let identity = match read {
            Ok(Ok(Some(raw))) => match parse_record(&raw) {
                Ok(identity) => Some(identity),
                Err(reason) => {
                    warn!(%reason, "Discarding malformed persisted session record");
                    None
                }
            },
            Ok(Ok(None)) => None,
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to read persisted session record");
                None
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.config.restore_timeout_ms,
                    "Timed out reading persisted session record"
                );
                None
            }
        };

        let mut state = self.state();
        if state.generation != generation {
            debug!("Discarding restored session superseded by sign-out");
            return state.phase.clone();
        }
        state.phase = match identity {
            Some(identity) => {
                info!(user_id = %identity.id, role = %identity.role(), "Session restored");
                SessionPhase::Authenticated(identity)
            }
            None => SessionPhase::Anonymous,
        };
        state.phase.clone()
    }

    /// Resolve an identity for `request` and establish a session.
    ///
    /// The identity is derived from the email's contents; there is no real
    /// credential verification anywhere in this system. On success the
    /// identity is persisted to the external store. On any failure the
    /// session settles unauthenticated; no partial identity is ever held.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> Result<Identity, SessionError> {
        request.validate().map_err(SessionError::Validation)?;

        let generation = self.begin_settling();
        self.simulate_backend_call().await;

        let identity = identity_for_email(&request.email);
        self.commit(generation, identity).await
    }

    /// Create a fresh account and establish a session.
    ///
    /// New registrations always receive the lowest-privilege role (student,
    /// no department) and a freshly generated identifier.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<Identity, SessionError> {
        request.validate().map_err(SessionError::Validation)?;

        let generation = self.begin_settling();
        self.simulate_backend_call().await;

        let identity = Identity {
            id: campusgate_models::ids::UserId::new(),
            name: request.name,
            email: request.email,
            assignment: RoleAssignment::DepartmentScoped {
                role: DepartmentRole::Student,
                department: None,
            },
        };
        self.commit(generation, identity).await
    }

    /// Clear the session and remove the persisted record. Idempotent.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        {
            let mut state = self.state();
            state.phase = SessionPhase::Anonymous;
            state.generation += 1;
        }

        if let Err(e) = self.store.remove(SESSION_KEY).await {
            warn!(error = %e, "Failed to remove persisted session record");
        }

        info!("Session cleared");
    }

    fn begin_settling(&self) -> u64 {
        let mut state = self.state();
        state.phase = SessionPhase::Settling;
        state.generation
    }

    async fn simulate_backend_call(&self) {
        let latency = self.config.login_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    async fn commit(&self, generation: u64, identity: Identity) -> Result<Identity, SessionError> {
        let record = PersistedIdentity::from(&identity);
        let payload = match serde_json::to_string(&record) {
            Ok(payload) => payload,
            Err(e) => {
                self.settle_unauthenticated(generation);
                return Err(SessionError::Serialize(e));
            }
        };

        {
            let mut state = self.state();
            if state.generation != generation {
                debug!("Discarding sign-in superseded by sign-out");
                return Err(SessionError::Superseded);
            }
            state.phase = SessionPhase::Authenticated(identity.clone());
        }

        if let Err(e) = self.store.put(SESSION_KEY, &payload).await {
            warn!(error = %e, "Failed to persist session record");
            self.settle_unauthenticated(generation);
            return Err(SessionError::Storage(e));
        }

        info!(user_id = %identity.id, role = %identity.role(), "Session established");
        Ok(identity)
    }

    fn settle_unauthenticated(&self, generation: u64) {
        let mut state = self.state();
        if state.generation == generation {
            state.phase = SessionPhase::Anonymous;
        }
    }
}

fn parse_record(raw: &str) -> Result<Identity, String> {
    let record: PersistedIdentity = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    Identity::try_from(record).map_err(|e| e.to_string())
}

/// Mock identity resolution: derives role and identity from the email's
/// contents. Substrings are checked in this exact order, so an email
/// matching several patterns resolves to the first match.
pub fn identity_for_email(email: &Email) -> Identity {
    let raw = email.as_str();

    let (id, name, assignment) = if raw.contains("admin") {
        (
            mock_ids::ADMINISTRATOR,
            "Admin User",
            RoleAssignment::Global(GlobalRole::Administrator),
        )
    } else if raw.contains("rector") {
        (
            mock_ids::RECTOR,
            "Rector User",
            RoleAssignment::Global(GlobalRole::Rector),
        )
    } else if raw.contains("head") {
        (
            mock_ids::DEPARTMENT_HEAD,
            "Department Head",
            RoleAssignment::DepartmentScoped {
                role: DepartmentRole::Head,
                department: Some(mock_ids::DEPARTMENT),
            },
        )
    } else if raw.contains("instructor") {
        (
            mock_ids::INSTRUCTOR,
            "Instructor User",
            RoleAssignment::DepartmentScoped {
                role: DepartmentRole::Instructor,
                department: Some(mock_ids::DEPARTMENT),
            },
        )
    } else {
        (
            mock_ids::STUDENT,
            "Student User",
            RoleAssignment::DepartmentScoped {
                role: DepartmentRole::Student,
                department: None,
            },
        )
    };

    Identity {
        id,
        name: name.to_string(),
        email: email.clone(),
        assignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_models::roles::Role;

    fn resolve(email: &str) -> Identity {
        identity_for_email(&Email::new_unchecked(email))
    }

    #[test]
    fn test_resolution_by_email_substring() {
        assert_eq!(resolve("admin@example.com").role(), Role::Administrator);
        assert_eq!(resolve("rector@example.com").role(), Role::Rector);
        assert_eq!(resolve("head@example.com").role(), Role::DepartmentHead);
        assert_eq!(resolve("instructor@example.com").role(), Role::Instructor);
        assert_eq!(resolve("someone@example.com").role(), Role::Student);
    }

    #[test]
    fn test_resolution_order_prefers_first_match() {
        // "administrator" contains "admin"; "admin" wins over later patterns
        assert_eq!(
            resolve("administrator.head@example.com").role(),
            Role::Administrator
        );
    }

    #[test]
    fn test_scoped_staff_get_a_department() {
        assert_eq!(
            resolve("head@example.com").department(),
            Some(mock_ids::DEPARTMENT)
        );
        assert_eq!(
            resolve("instructor@example.com").department(),
            Some(mock_ids::DEPARTMENT)
        );
    }

    #[test]
    fn test_global_roles_and_students_have_no_department() {
        assert_eq!(resolve("admin@example.com").department(), None);
        assert_eq!(resolve("rector@example.com").department(), None);
        assert_eq!(resolve("someone@example.com").department(), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(resolve("head@example.com"), resolve("head@example.com"));
        assert_eq!(resolve("head@example.com").id, mock_ids::DEPARTMENT_HEAD);
    }
}
