//! Wire entities shared with the room service.
//!
//! Timestamps are `DateTime<Utc>` and travel as ISO-8601 strings. Identifier
//! fields use the branded types from [`crate::ids`], so a deserialized entity
//! already carries validated identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{RoomId, UserId};

/// A collaboration room.
///
/// Created server-side; the client only ever receives and validates
/// instances. Use [`crate::validate::room`] to produce one from raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Human-shareable invite code (4-16 characters).
    pub slug: String,
    /// Display name (non-empty).
    pub name: String,
    /// User who owns the room.
    pub owner_id: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A user record as the room service stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Service-side user identifier.
    pub id: UserId,
    /// Opaque uid assigned by the identity provider.
    pub provider_uid: String,
    /// Email address, if the provider shared one.
    pub email: Option<String>,
    /// Display name, if the provider shared one.
    pub display_name: Option<String>,
    /// Avatar URL, if the provider shared one.
    pub photo_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Outbound payload for room creation.
///
/// Built transiently per create-room action, never persisted. Must pass
/// [`crate::validate::create_room_request`] before serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Desired room name (non-empty).
    pub name: String,
    /// Desired slug; the service generates one when absent.
    pub slug: Option<String>,
}
