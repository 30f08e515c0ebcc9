//! The navigation filter: derives the visible navigation entries for the
//! current session.

use std::sync::Arc;

use crate::modules::session::SessionPhase;
use crate::registry::SectionRegistry;

use super::model::NavEntry;

/// Filters the section registry down to the entries the current identity
/// may open.
///
/// Consults the same registry as the route guard, which is what guarantees
/// an entry appears here exactly when the guard would allow it. Entries
/// come back in registry order; nothing is re-sorted.
#[derive(Clone)]
pub struct NavigationFilter {
    registry: Arc<SectionRegistry>,
}

impl NavigationFilter {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self { registry }
    }

    /// The ordered navigation entries for `session`.
    ///
    /// Empty when no identity is held, including while the session is still
    /// settling.
    pub fn visible_entries(&self, session: &SessionPhase) -> Vec<NavEntry> {
        let Some(identity) = session.identity() else {
            return Vec::new();
        };
        let role = identity.role();

        self.registry
            .entries()
            .iter()
            .filter(|entry| entry.allows(role))
            .map(|entry| NavEntry {
                section: entry.id.clone(),
                label: entry.label.clone(),
                icon: entry.icon.clone(),
            })
            .collect()
    }
}
