//! Route guard decision types.

/// Outcome of evaluating a navigation attempt against the session and the
/// permission table.
///
/// Both redirect variants are normal outcomes, not errors; denials are
/// silent redirects and are never logged as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session is still settling. Render a neutral waiting indicator
    /// and re-evaluate once it settles.
    Pending,

    /// Render the requested section.
    Allowed,

    /// No identity is held; redirect to the login entry point.
    RedirectToLogin,

    /// The identity's role is not in the section's permitted set; soft
    /// fallback to the default landing section.
    RedirectToDefault,
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}
