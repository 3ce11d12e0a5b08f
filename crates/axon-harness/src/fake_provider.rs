//! Hand-driven identity provider.

use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axon_core::{AuthToken, Identity, IdentityProvider, ProviderError};
use tokio::sync::mpsc;

/// Identity fixture with only the uid populated.
pub fn identity(uid: &str) -> Identity {
    Identity { uid: uid.to_owned(), display_name: None, email: None, photo_url: None }
}

/// Scripted identity provider.
///
/// Tests call [`notify`](Self::notify) to emit state changes and the
/// `fail_*` methods to script the next operation's outcome. Unscripted
/// operations succeed; unscripted token derivations yield
/// `token-for-<uid>`.
#[derive(Default)]
pub struct FakeProvider {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Option<Identity>>>>,
    token_failures: Mutex<VecDeque<ProviderError>>,
    sign_in_failures: Mutex<VecDeque<ProviderError>>,
    sign_out_failures: Mutex<VecDeque<ProviderError>>,
    sign_ins: AtomicUsize,
    sign_outs: AtomicUsize,
}

impl FakeProvider {
    /// Provider with no scripted failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a state-change notification to every subscriber, in order.
    pub fn notify(&self, change: Option<Identity>) {
        let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        for subscriber in subscribers.iter() {
            let _ = subscriber.send(change.clone());
        }
    }

    /// Script the next token derivation to fail.
    pub fn fail_next_token(&self, error: ProviderError) {
        self.token_failures.lock().unwrap_or_else(|e| e.into_inner()).push_back(error);
    }

    /// Script the next interactive sign-in to fail.
    pub fn fail_next_sign_in(&self, error: ProviderError) {
        self.sign_in_failures.lock().unwrap_or_else(|e| e.into_inner()).push_back(error);
    }

    /// Script the next sign-out to fail.
    pub fn fail_next_sign_out(&self, error: ProviderError) {
        self.sign_out_failures.lock().unwrap_or_else(|e| e.into_inner()).push_back(error);
    }

    /// Number of sign-in attempts observed.
    pub fn sign_in_count(&self) -> usize {
        self.sign_ins.load(Ordering::SeqCst)
    }

    /// Number of sign-out attempts observed.
    pub fn sign_out_count(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }

    fn pop(queue: &Mutex<VecDeque<ProviderError>>) -> Option<ProviderError> {
        queue.lock().unwrap_or_else(|e| e.into_inner()).pop_front()
    }
}

impl IdentityProvider for FakeProvider {
    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Identity>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).push(tx);
        rx
    }

    fn sign_in_interactive(
        &self,
    ) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        let outcome = Self::pop(&self.sign_in_failures);
        async move {
            match outcome {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        let outcome = Self::pop(&self.sign_out_failures);
        async move {
            match outcome {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    fn derive_token(
        &self,
        identity: &Identity,
    ) -> impl std::future::Future<Output = Result<AuthToken, ProviderError>> + Send {
        let outcome = match Self::pop(&self.token_failures) {
            Some(error) => Err(error),
            None => AuthToken::new(format!("token-for-{}", identity.uid))
                .map_err(|_| ProviderError::Provider("derived token was empty".to_owned())),
        };
        async move { outcome }
    }
}
