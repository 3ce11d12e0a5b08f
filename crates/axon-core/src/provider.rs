//! Identity provider capability.
//!
//! The identity provider is an external collaborator. Its internal protocol
//! is out of scope; the client reaches it only through this trait. Swapping
//! the production adapter for a scripted fake in tests requires no changes
//! to the synchronizer.

use tokio::sync::mpsc;

use crate::session::{AuthToken, Identity};

/// Errors from identity provider operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The user dismissed the interactive sign-in.
    #[error("sign-in cancelled by user")]
    Cancelled,

    /// The provider was unreachable.
    #[error("provider network failure: {0}")]
    Network(String),

    /// The provider rejected the operation.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Capability interface to the external identity provider.
///
/// # Contract
///
/// - Notifications are delivered in the order the provider emits them; the
///   channel never reorders or coalesces
/// - `None` means signed out, `Some` means signed in
/// - Dropping the receiver unsubscribes
/// - `derive_token` is called with the identity from the most recent
///   notification and may be awaited before the next notification is
///   processed
pub trait IdentityProvider: Send + Sync + 'static {
    /// Subscribe to identity change notifications.
    ///
    /// Each call returns an independent stream. The provider pushes the
    /// current state change on every sign-in and sign-out, on its own
    /// schedule, independent of any user action.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Identity>>;

    /// Request an interactive sign-in.
    ///
    /// Success means the flow was started and completed at the provider; the
    /// resulting state arrives as a notification, never as a return value.
    fn sign_in_interactive(
        &self,
    ) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send;

    /// Request sign-out. Same notification contract as sign-in.
    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send;

    /// Derive a short-lived token for the given identity.
    fn derive_token(
        &self,
        identity: &Identity,
    ) -> impl std::future::Future<Output = Result<AuthToken, ProviderError>> + Send;
}
