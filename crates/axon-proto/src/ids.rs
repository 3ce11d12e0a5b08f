//! Branded identifiers.
//!
//! Room and user identifiers are UUIDs on the wire, but a `UserId` handed to
//! a `RoomId` slot is a bug the compiler should catch, not a runtime
//! surprise. Each identifier is a newtype over [`Uuid`] whose only public
//! constructors are [`RoomId::parse`] / [`UserId::parse`] and
//! deserialization, both of which enforce the UUID shape.
//!
//! # Invariants
//!
//! - Every live value wraps a syntactically valid UUID
//! - The brand carries no runtime payload beyond the UUID itself

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Rejected input for a branded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} is not a UUID: {value:?}")]
pub struct IdParseError {
    /// Which identifier kind rejected the input.
    pub kind: &'static str,
    /// The rejected input string.
    pub value: String,
}

/// Identifier of a collaboration room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(Uuid);

impl RoomId {
    /// Parse a room identifier from its wire form.
    ///
    /// This is the only way to produce a `RoomId` from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`IdParseError`] if the input is not a syntactically valid
    /// UUID.
    pub fn parse(value: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IdParseError { kind: "room id", value: value.to_owned() })
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl TryFrom<String> for RoomId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.to_string()
    }
}

/// Identifier of a user known to the room service.
///
/// Distinct from the identity provider's opaque uid; this is the service's
/// own primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a user identifier from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`IdParseError`] if the input is not a syntactically valid
    /// UUID.
    pub fn parse(value: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IdParseError { kind: "user id", value: value.to_owned() })
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl TryFrom<String> for UserId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "0191d1a0-5c3e-7f4a-9b2d-1e8f3c6a7b01";

    #[test]
    fn parse_accepts_valid_uuid() {
        let id = RoomId::parse(UUID).unwrap();
        assert_eq!(id.to_string(), UUID);
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(RoomId::parse("").is_err());
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn parse_rejects_non_uuid() {
        let err = RoomId::parse("not-a-uuid").unwrap_err();
        assert_eq!(err.kind, "room id");
        assert_eq!(err.value, "not-a-uuid");
    }

    #[test]
    fn serde_round_trips_as_string() {
        let id = UserId::parse(UUID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        // Encodes as a plain JSON string, not an object.
        assert_eq!(json, serde_json::to_string(UUID).unwrap());

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_rejects_non_uuid_string() {
        let result: Result<RoomId, _> = serde_json::from_str("\"42\"");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_numeric_input() {
        let result: Result<RoomId, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn any_uuid_parses_and_round_trips(raw in any::<u128>()) {
                let text = Uuid::from_u128(raw).hyphenated().to_string();
                let id = RoomId::parse(&text).unwrap();
                prop_assert_eq!(id.to_string(), text);
            }

            #[test]
            fn arbitrary_short_strings_never_panic(input in ".{0,40}") {
                // Parse may fail, but must return, not panic.
                let _ = RoomId::parse(&input);
                let _ = UserId::parse(&input);
            }
        }
    }
}
