//! The route guard: gates navigation to protected sections.

use std::sync::Arc;

use tracing::debug;

use campusgate_core::errors::AccessError;

use crate::modules::session::SessionPhase;
use crate::registry::SectionRegistry;

use super::model::RouteDecision;

/// Decides, per navigation attempt, whether to render a section, wait, or
/// redirect.
///
/// The guard re-evaluates on every navigation and every session change, so
/// a decision is final for the request that produced it, not for the
/// process lifetime. It reads the session and the registry but never
/// mutates either.
#[derive(Clone)]
pub struct RouteGuard {
    registry: Arc<SectionRegistry>,
}

impl RouteGuard {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self { registry }
    }

    /// Decide the outcome of navigating to `section` under `session`.
    ///
    /// Asking about a section absent from the registry returns `Err`
    /// whatever the session state: that is a registry/guard mismatch to be
    /// fixed in configuration, not a condition to silently deny.
    pub fn evaluate(
        &self,
        session: &SessionPhase,
        section: &str,
    ) -> Result<RouteDecision, AccessError> {
        let entry = self
            .registry
            .get(section)
            .ok_or_else(|| AccessError::UnknownSection(section.to_string()))?;

        let decision = match session {
            SessionPhase::Settling => RouteDecision::Pending,
            SessionPhase::Anonymous => RouteDecision::RedirectToLogin,
            SessionPhase::Authenticated(identity) => {
                if entry.allows(identity.role()) {
                    RouteDecision::Allowed
                } else {
                    RouteDecision::RedirectToDefault
                }
            }
        };

        debug!(section, ?decision, "Route evaluated");
        Ok(decision)
    }
}
