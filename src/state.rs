use std::sync::Arc;

use campusgate_config::SessionConfig;
use campusgate_core::kv::FileKvStore;

use crate::modules::guard::RouteGuard;
use crate::modules::nav::NavigationFilter;
use crate::modules::session::SessionStore;
use crate::registry::{SectionRegistry, default_registry};

/// Shared application state: the session store plus the read-only
/// collaborators that consult it.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub guard: RouteGuard,
    pub nav: NavigationFilter,
    pub registry: Arc<SectionRegistry>,
}

pub fn init_app_state() -> AppState {
    let config = SessionConfig::from_env();
    let registry = Arc::new(default_registry());
    let store = Arc::new(FileKvStore::new(config.state_dir.clone()));

    AppState {
        session: SessionStore::new(store, config),
        guard: RouteGuard::new(registry.clone()),
        nav: NavigationFilter::new(registry.clone()),
        registry,
    }
}
