//! Navigation view types.

use serde::Serialize;

/// One navigation entry visible to the current identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    /// Section identifier; also the route path.
    pub section: String,
    pub label: String,
    pub icon: String,
}
