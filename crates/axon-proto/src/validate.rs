//! Structural validators for data crossing the network boundary.
//!
//! Every payload entering or leaving the client passes through one of these
//! before application logic sees it. Validators take a loosely-typed decoded
//! JSON value, check presence, type and constraint of every declared field,
//! and return a value whose identifier fields are branded.
//!
//! # Contract
//!
//! - Pure and synchronous, no I/O
//! - Unknown fields are ignored (forward compatible)
//! - Every violated field is reported, not just the first
//! - No silent coercion or defaulting

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    ids::{RoomId, UserId},
    models::{CreateRoomRequest, Room, User},
};

/// Minimum slug length in characters, applied when a slug is present.
pub const SLUG_MIN: usize = 4;

/// Maximum slug length in characters.
pub const SLUG_MAX: usize = 16;

/// A single violated field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name, or `"$"` for a violation of the value as a whole.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: String,
}

/// Structural mismatch between the expected and received shape.
///
/// Carries every violation found in one pass so callers (and logs) see the
/// full picture instead of fixing fields one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Entity the value was validated against.
    pub entity: &'static str,
    /// All violations found, in field declaration order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Error with a single violation.
    pub fn single(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self { entity, violations: vec![FieldViolation { field, reason: reason.into() }] }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} violation(s):", self.entity, self.violations.len())?;
        for violation in &self.violations {
            write!(f, " [{}: {}]", violation.field, violation.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a decoded JSON value as a [`Room`].
///
/// # Errors
///
/// Returns [`ValidationError`] enumerating every violated field.
pub fn room(value: &Value) -> Result<Room, ValidationError> {
    let obj = object("room", value)?;
    let mut violations = Vec::new();

    let id = str_field(obj, "id", &mut violations)
        .and_then(|s| check_room_id(&s, "id", &mut violations));
    let slug = str_field(obj, "slug", &mut violations)
        .and_then(|s| check_slug(s, "slug", &mut violations));
    let name = str_field(obj, "name", &mut violations)
        .and_then(|s| check_non_empty(s, "name", &mut violations));
    let owner_id = str_field(obj, "owner_id", &mut violations)
        .and_then(|s| check_user_id(&s, "owner_id", &mut violations));
    let created_at = str_field(obj, "created_at", &mut violations)
        .and_then(|s| check_datetime(&s, "created_at", &mut violations));
    let updated_at = str_field(obj, "updated_at", &mut violations)
        .and_then(|s| check_datetime(&s, "updated_at", &mut violations));

    match (id, slug, name, owner_id, created_at, updated_at) {
        (Some(id), Some(slug), Some(name), Some(owner_id), Some(created_at), Some(updated_at))
            if violations.is_empty() =>
        {
            Ok(Room { id, slug, name, owner_id, created_at, updated_at })
        },
        _ => Err(ValidationError { entity: "room", violations }),
    }
}

/// Validate a decoded JSON value as a [`User`].
///
/// # Errors
///
/// Returns [`ValidationError`] enumerating every violated field.
pub fn user(value: &Value) -> Result<User, ValidationError> {
    let obj = object("user", value)?;
    let mut violations = Vec::new();

    let id =
        str_field(obj, "id", &mut violations).and_then(|s| check_user_id(&s, "id", &mut violations));
    let provider_uid = str_field(obj, "provider_uid", &mut violations)
        .and_then(|s| check_non_empty(s, "provider_uid", &mut violations));
    let email = opt_str_field(obj, "email", &mut violations);
    let display_name = opt_str_field(obj, "display_name", &mut violations);
    let photo_url = opt_str_field(obj, "photo_url", &mut violations);
    let created_at = str_field(obj, "created_at", &mut violations)
        .and_then(|s| check_datetime(&s, "created_at", &mut violations));
    let updated_at = str_field(obj, "updated_at", &mut violations)
        .and_then(|s| check_datetime(&s, "updated_at", &mut violations));

    match (id, provider_uid, email, display_name, photo_url, created_at, updated_at) {
        (
            Some(id),
            Some(provider_uid),
            Some(email),
            Some(display_name),
            Some(photo_url),
            Some(created_at),
            Some(updated_at),
        ) if violations.is_empty() => Ok(User {
            id,
            provider_uid,
            email,
            display_name,
            photo_url,
            created_at,
            updated_at,
        }),
        _ => Err(ValidationError { entity: "user", violations }),
    }
}

/// Validate a decoded JSON value as a [`CreateRoomRequest`].
///
/// Applied to outbound payloads before serialization so a malformed request
/// is rejected locally, before any network call.
///
/// # Errors
///
/// Returns [`ValidationError`] enumerating every violated field.
pub fn create_room_request(value: &Value) -> Result<CreateRoomRequest, ValidationError> {
    let obj = object("create_room_request", value)?;
    let mut violations = Vec::new();

    let name = str_field(obj, "name", &mut violations)
        .and_then(|s| check_non_empty(s, "name", &mut violations));
    let slug = match obj.get("slug") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => check_slug(s.clone(), "slug", &mut violations).map(Some),
        Some(other) => {
            violations.push(FieldViolation {
                field: "slug",
                reason: format!("expected string or null, got {}", type_name(other)),
            });
            None
        },
    };

    match (name, slug) {
        (Some(name), Some(slug)) if violations.is_empty() => {
            Ok(CreateRoomRequest { name, slug })
        },
        _ => Err(ValidationError { entity: "create_room_request", violations }),
    }
}

fn object<'a>(
    entity: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::single(entity, "$", format!("expected object, got {}", type_name(value)))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Required string field. Records a violation when missing or mistyped.
fn str_field(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(FieldViolation {
                field,
                reason: format!("expected string, got {}", type_name(other)),
            });
            None
        },
        None => {
            violations.push(FieldViolation { field, reason: "missing".to_owned() });
            None
        },
    }
}

/// Optional string field. Missing and null are both valid absences.
///
/// The outer `Option` is `None` only on a type violation.
fn opt_str_field(
    obj: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(other) => {
            violations.push(FieldViolation {
                field,
                reason: format!("expected string or null, got {}", type_name(other)),
            });
            None
        },
    }
}

fn check_room_id(
    raw: &str,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<RoomId> {
    match RoomId::parse(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            violations.push(FieldViolation { field, reason: "not a UUID".to_owned() });
            None
        },
    }
}

fn check_user_id(
    raw: &str,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<UserId> {
    match UserId::parse(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            violations.push(FieldViolation { field, reason: "not a UUID".to_owned() });
            None
        },
    }
}

fn check_datetime(
    raw: &str,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(_) => {
            violations.push(FieldViolation { field, reason: "not an ISO-8601 timestamp".to_owned() });
            None
        },
    }
}

fn check_non_empty(
    value: String,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    if value.is_empty() {
        violations.push(FieldViolation { field, reason: "must not be empty".to_owned() });
        None
    } else {
        Some(value)
    }
}

fn check_slug(
    value: String,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let len = value.chars().count();
    if (SLUG_MIN..=SLUG_MAX).contains(&len) {
        Some(value)
    } else {
        violations.push(FieldViolation {
            field,
            reason: format!("length must be {SLUG_MIN}-{SLUG_MAX} characters, got {len}"),
        });
        None
    }
}
