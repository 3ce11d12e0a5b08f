//! Axon client core.
//!
//! The two load-bearing pieces every screen of the application depends on:
//!
//! - [`SessionSynchronizer`]: single-writer state machine tracking who the
//!   current user is and what credential they hold, driven by identity
//!   provider notifications
//! - [`RoomApi`]: schema-validated boundary to the room service; nothing
//!   unvalidated crosses it in either direction
//!
//! Plus [`RouteGuard`], a pure consumer of session snapshots that decides
//! navigation access.
//!
//! # Architecture
//!
//! ```text
//! IdentityProvider ──▶ SessionSynchronizer ──▶ watch::Receiver<Session>
//!                                                   │            │
//!                                              RouteGuard     RoomApi ──▶ validators
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod guard;
mod rooms;
mod session_sync;
mod transport;

pub use axon_core::{
    AuthToken, Identity, IdentityProvider, ProviderConfig, ProviderError, Session, SessionStatus,
};
pub use error::{ApiError, AuthError};
pub use guard::{RouteDecision, RouteGuard};
pub use rooms::{CREATE_ROOM_PATH, RoomApi};
pub use session_sync::SessionSynchronizer;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
