//! Session model and identity-provider capability for the Axon client.
//!
//! This crate holds the pieces the rest of the client is built on:
//!
//! - [`Session`]: the client's current belief about authentication status
//!   and credential, shaped so that illegal combinations cannot exist
//! - [`IdentityProvider`]: the capability interface to the external identity
//!   provider (the provider's internal protocol is out of scope)
//! - [`ProviderConfig`]: named configuration for the provider connection
//!
//! No I/O happens here. The synchronizer that drives [`Session`] lives in
//! `axon-client`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod provider;
mod session;

pub use config::{ConfigError, ProviderConfig};
pub use provider::{IdentityProvider, ProviderError};
pub use session::{AuthToken, EmptyToken, Identity, Session, SessionStatus};
