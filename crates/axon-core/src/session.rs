//! Session state.
//!
//! A [`Session`] is the client's current belief about who the user is and
//! what credential they hold. It has exactly one writer (the synchronizer in
//! `axon-client`); everything else sees immutable snapshots.
//!
//! # State machine
//!
//! ```text
//! Initializing ──▶ Unauthenticated ◀──▶ Authenticated
//!       └────────────────────────────────────▲
//! ```
//!
//! `Initializing` is the only starting state and is never re-entered.
//!
//! # Invariants
//!
//! - A token is only ever observable together with its identity (both live
//!   inside the `Authenticated` variant)
//! - `token: None` inside `Authenticated` means token derivation failed:
//!   the identity is known but no usable credential exists, and request
//!   paths must treat the session as not authenticated

use std::fmt;

use thiserror::Error;

/// Opaque user record delivered by the identity provider.
///
/// Present iff the provider reports an authenticated user. The uid is the
/// provider's own identifier, distinct from the room service's `UserId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned user identifier.
    pub uid: String,
    /// Display name, if the provider shared one.
    pub display_name: Option<String>,
    /// Email address, if the provider shared one.
    pub email: Option<String>,
    /// Avatar URL, if the provider shared one.
    pub photo_url: Option<String>,
}

/// Attempted to construct an [`AuthToken`] from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("auth token must not be empty")]
pub struct EmptyToken;

/// Short-lived bearer credential derived from an [`Identity`].
///
/// Non-empty by construction. The `Debug` impl redacts the value so tokens
/// never leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyToken`] if the string is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyToken> {
        let raw = raw.into();
        if raw.is_empty() { Err(EmptyToken) } else { Ok(Self(raw)) }
    }

    /// The raw token, for use as a bearer credential.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<redacted {} bytes>)", self.0.len())
    }
}

/// Coarse session status, for consumers that only branch on state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No notification has arrived from the provider yet.
    Initializing,
    /// The provider reports no signed-in user.
    Unauthenticated,
    /// The provider reports a signed-in user.
    Authenticated,
}

/// The authenticated-or-not state of the client.
///
/// Owned and mutated exclusively by the session synchronizer; all other
/// components hold read-only snapshots and must re-read after any await
/// point rather than caching across it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Before the first provider notification.
    Initializing,
    /// Provider reported sign-out (or no prior sign-in).
    Unauthenticated,
    /// Provider reported a signed-in user.
    Authenticated {
        /// The signed-in user.
        identity: Identity,
        /// Derived credential. `None` iff token derivation failed, in which
        /// case request paths must treat the session as unauthenticated.
        token: Option<AuthToken>,
    },
}

impl Session {
    /// Coarse status of this snapshot.
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Initializing => SessionStatus::Initializing,
            Self::Unauthenticated => SessionStatus::Unauthenticated,
            Self::Authenticated { .. } => SessionStatus::Authenticated,
        }
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    /// The bearer credential, if one was successfully derived.
    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            Self::Authenticated { token, .. } => token.as_ref(),
            _ => None,
        }
    }

    /// True iff this session can authenticate an API request.
    ///
    /// Stricter than `status() == Authenticated`: a session whose token
    /// derivation failed is authenticated for display purposes but not for
    /// request purposes.
    pub fn is_request_ready(&self) -> bool {
        self.token().is_some()
    }
}
