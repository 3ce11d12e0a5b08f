//! HTTP transport seam.
//!
//! The [`HttpTransport`] trait decouples the API boundary from the wire so
//! tests can script responses without a server. [`ReqwestTransport`] is the
//! production implementation.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

/// Transport-level failure: connection refused, DNS, TLS, timeout.
///
/// A response with a non-success status is NOT a transport error; it is a
/// delivered response and is classified by the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// A delivered HTTP response, however unwelcome its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to POST a JSON body with a bearer credential.
///
/// Exactly one request per call, no retry, no redirect-following surprises.
pub trait HttpTransport: Send + Sync {
    /// Send `body` to `url` with `Authorization: Bearer <bearer>`.
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send {
        self.as_ref().post_json(url, bearer, body)
    }
}

/// Production transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with default client settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send {
        let request = self.client.post(url).bearer_auth(bearer).json(body);

        async move {
            let response =
                request.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body =
                response.bytes().await.map_err(|e| TransportError(e.to_string()))?.to_vec();

            Ok(HttpResponse { status, body })
        }
    }
}
