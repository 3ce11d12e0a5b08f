//! Session state synchronizer.
//!
//! Owns the canonical in-memory [`Session`] and is its only writer. The
//! provider's notification stream is consumed by a single worker task, so
//! notifications are processed strictly in order and each one (including its
//! async token derivation) runs to completion before the next is accepted.
//! Observers hold `watch` receivers and only ever see fully-derived
//! snapshots; the intermediate state during derivation is never published.

use std::sync::Arc;

use axon_core::{IdentityProvider, ProviderError, Session};
use tokio::{sync::watch, task::JoinHandle};

use crate::error::AuthError;

/// Single-writer synchronizer between the identity provider and [`Session`].
///
/// Construct one per application context, call [`start`](Self::start) once,
/// and call [`stop`](Self::stop) when the owning context is torn down.
pub struct SessionSynchronizer<P: IdentityProvider> {
    provider: Arc<P>,
    sessions: Arc<watch::Sender<Session>>,
    last_error: Arc<watch::Sender<Option<String>>>,
    worker: Option<JoinHandle<()>>,
}

impl<P: IdentityProvider> SessionSynchronizer<P> {
    /// Create a synchronizer in the `Initializing` state.
    ///
    /// No subscription happens until [`start`](Self::start).
    pub fn new(provider: Arc<P>) -> Self {
        let (sessions, _) = watch::channel(Session::Initializing);
        let (last_error, _) = watch::channel(None);
        Self {
            provider,
            sessions: Arc::new(sessions),
            last_error: Arc::new(last_error),
            worker: None,
        }
    }

    /// Subscribe to the provider and begin publishing session snapshots.
    ///
    /// Exactly once per synchronizer lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyStarted`] on a second call.
    pub fn start(&mut self) -> Result<(), AuthError> {
        if self.worker.is_some() {
            return Err(AuthError::AlreadyStarted);
        }

        let mut notifications = self.provider.subscribe();
        let provider = Arc::clone(&self.provider);
        let sessions = Arc::clone(&self.sessions);

        self.worker = Some(tokio::spawn(async move {
            while let Some(change) = notifications.recv().await {
                let next = match change {
                    None => Session::Unauthenticated,
                    Some(identity) => match provider.derive_token(&identity).await {
                        Ok(token) => {
                            Session::Authenticated { identity, token: Some(token) }
                        },
                        Err(error) => {
                            // Recovered locally: the identity is still
                            // recorded, request paths see no credential.
                            tracing::warn!(
                                uid = %identity.uid,
                                %error,
                                "token derivation failed"
                            );
                            Session::Authenticated { identity, token: None }
                        },
                    },
                };
                sessions.send_replace(next);
            }
        }));

        Ok(())
    }

    /// Read-only stream of session snapshots.
    ///
    /// The receiver always holds a value; before the first notification it
    /// is `Session::Initializing`.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sessions.subscribe()
    }

    /// The current snapshot.
    pub fn current(&self) -> Session {
        self.sessions.borrow().clone()
    }

    /// Component-local error channel for failed login/logout attempts.
    ///
    /// Cleared on the next successful attempt. Session mutation never flows
    /// through here.
    pub fn errors(&self) -> watch::Receiver<Option<String>> {
        self.last_error.subscribe()
    }

    /// Request an interactive sign-in from the provider.
    ///
    /// Does not mutate the session; the resulting state arrives through the
    /// notification stream.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] if the provider flow failed
    /// (cancellation, network, outage). The session is untouched.
    pub async fn login(&self) -> Result<(), AuthError> {
        self.record(self.provider.sign_in_interactive().await)
    }

    /// Request sign-out from the provider. Same contract as
    /// [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] on provider failure; the session is
    /// untouched.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.record(self.provider.sign_out().await)
    }

    /// Unsubscribe and stop the worker.
    ///
    /// When this returns, no further session mutation is possible.
    /// Idempotent.
    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
            // Await so an in-flight notification handler cannot publish
            // after we return.
            let _ = worker.await;
        }
    }

    fn record(&self, result: Result<(), ProviderError>) -> Result<(), AuthError> {
        match result {
            Ok(()) => {
                self.last_error.send_replace(None);
                Ok(())
            },
            Err(error) => {
                self.last_error.send_replace(Some(error.to_string()));
                Err(AuthError::Provider(error))
            },
        }
    }
}

impl<P: IdentityProvider> Drop for SessionSynchronizer<P> {
    fn drop(&mut self) {
        // Best effort; stop() is the guaranteed path.
        if let Some(worker) = &self.worker {
            worker.abort();
        }
    }
}
