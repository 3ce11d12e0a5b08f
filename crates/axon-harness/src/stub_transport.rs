//! Scripted HTTP transport.

use std::{collections::VecDeque, sync::Mutex};

use axon_client::{HttpResponse, HttpTransport, TransportError};
use serde_json::Value;

/// One request that reached the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full request URL.
    pub url: String,
    /// Bearer credential as attached.
    pub bearer: String,
    /// Serialized JSON body.
    pub body: Value,
}

/// Transport that replays scripted responses and records every request.
///
/// Responses are consumed in FIFO order; a request beyond the script fails
/// with a transport error so a test can never silently over-request.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    /// Stub with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub fn respond(&self, status: u16, body: &Value) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(HttpResponse { status, body: body.to_string().into_bytes() }));
    }

    /// Queue a response with the given status and raw (possibly non-JSON)
    /// body.
    pub fn respond_raw(&self, status: u16, body: &[u8]) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(HttpResponse { status, body: body.to_vec() }));
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(TransportError(reason.to_owned())));
    }

    /// Every request that reached the stub, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of requests that reached the stub.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl HttpTransport for StubTransport {
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).push(RecordedRequest {
            url: url.to_owned(),
            bearer: bearer.to_owned(),
            body: body.clone(),
        });

        let outcome = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response left".to_owned())));

        async move { outcome }
    }
}
