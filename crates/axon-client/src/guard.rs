//! Route guard.
//!
//! A pure consumer of session snapshots: given the current session and
//! location it computes one navigation decision. Holding while the session
//! is still `Initializing` prevents a flash of protected content before the
//! first provider notification arrives.

use axon_core::{Session, SessionStatus};

/// Navigation decision for one (session, location) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested location.
    Allow,
    /// Render nothing yet; the first provider notification is pending.
    Hold,
    /// Send the user to the login location.
    RedirectToLogin,
}

/// Session-based navigation policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { login_path: "/login".to_owned() }
    }
}

impl RouteGuard {
    /// Guard redirecting unauthenticated navigation to `login_path`.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self { login_path: login_path.into() }
    }

    /// Decide whether `path` may render under `session`.
    ///
    /// Redirects iff the session is `Unauthenticated` and `path` is not the
    /// login location; holds while `Initializing`; allows otherwise.
    pub fn decide(&self, session: &Session, path: &str) -> RouteDecision {
        match session.status() {
            SessionStatus::Initializing => RouteDecision::Hold,
            SessionStatus::Unauthenticated if path != self.login_path => {
                RouteDecision::RedirectToLogin
            },
            SessionStatus::Unauthenticated | SessionStatus::Authenticated => {
                RouteDecision::Allow
            },
        }
    }
}
