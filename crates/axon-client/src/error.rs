//! Client error types.
//!
//! None of these are fatal: every failure is a value handed back to the
//! caller or recorded on the owning component, never an abrupt termination.

use axon_core::ProviderError;
use axon_proto::ValidationError;
use thiserror::Error;

/// Errors from session synchronizer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Interactive sign-in/out failed at the provider. The session is left
    /// in its prior state.
    #[error("identity provider error: {0}")]
    Provider(#[from] ProviderError),

    /// `start()` was called on an already-started synchronizer.
    #[error("session synchronizer already started")]
    AlreadyStarted,
}

/// Errors from the room API boundary.
///
/// Callers must distinguish a request that never left the client
/// (`InvalidPayload`), a transport-level failure (`RequestFailed`), and a
/// transport success carrying a body the contract rejects
/// (`ResponseMalformed`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The outbound payload failed validation. No network request was made.
    #[error("invalid request payload: {0}")]
    InvalidPayload(ValidationError),

    /// The transport failed or the service returned a non-success status.
    /// Response validation was never attempted. Not retried automatically.
    #[error("request failed: {reason}")]
    RequestFailed {
        /// HTTP status, when the failure happened after a response arrived.
        status: Option<u16>,
        /// Description of the failure.
        reason: String,
    },

    /// The transport succeeded but the body failed structural validation.
    /// Unvalidated data is never forwarded to callers.
    #[error("malformed response: {0}")]
    ResponseMalformed(ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_includes_reason() {
        let err = ApiError::RequestFailed { status: Some(500), reason: "status 500".to_owned() };
        assert_eq!(err.to_string(), "request failed: status 500");
    }

    #[test]
    fn provider_error_converts() {
        let err: AuthError = ProviderError::Cancelled.into();
        assert_eq!(err, AuthError::Provider(ProviderError::Cancelled));
    }
}
