//! Room API boundary.
//!
//! Every request is validated before it leaves and every response is
//! validated before it is returned. A transport success carrying a body the
//! contract rejects is a failure, not a success.

use axon_core::AuthToken;
use axon_proto::{CreateRoomRequest, Room, ValidationError, validate};
use serde_json::Value;

use crate::{
    error::ApiError,
    transport::{HttpTransport, TransportError},
};

/// Room creation endpoint, relative to the service base URL.
pub const CREATE_ROOM_PATH: &str = "/api/room/create";

/// Schema-validated client for the room service.
///
/// Holds no session state; callers pass the credential per request so a
/// stale snapshot is never silently reused.
#[derive(Debug, Clone)]
pub struct RoomApi<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> RoomApi<T> {
    /// Create a client for the service at `base_url`.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { transport, base_url }
    }

    /// Create a room.
    ///
    /// The payload is validated locally first; a malformed payload fails
    /// fast with zero network requests. On a delivered 2xx response the body
    /// is piped through the room validator, and only a validator-accepted
    /// value is returned.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidPayload`]: payload rejected before any request
    /// - [`ApiError::RequestFailed`]: transport failure or non-success
    ///   status, response validation never attempted
    /// - [`ApiError::ResponseMalformed`]: 2xx response whose body fails
    ///   structural validation
    pub async fn create_room(
        &self,
        token: &AuthToken,
        payload: &CreateRoomRequest,
    ) -> Result<Room, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| {
            ApiError::InvalidPayload(ValidationError::single(
                "create_room_request",
                "$",
                format!("payload is not serializable: {e}"),
            ))
        })?;
        validate::create_room_request(&body).map_err(ApiError::InvalidPayload)?;

        let url = format!("{}{CREATE_ROOM_PATH}", self.base_url);
        let response = self
            .transport
            .post_json(&url, token.as_str(), &body)
            .await
            .map_err(|TransportError(reason)| ApiError::RequestFailed { status: None, reason })?;

        if !response.is_success() {
            return Err(ApiError::RequestFailed {
                status: Some(response.status),
                reason: format!("room service returned status {}", response.status),
            });
        }

        let decoded: Value = serde_json::from_slice(&response.body).map_err(|e| {
            ApiError::ResponseMalformed(ValidationError::single(
                "room",
                "$",
                format!("response body is not JSON: {e}"),
            ))
        })?;

        validate::room(&decoded).map_err(ApiError::ResponseMalformed)
    }
}
