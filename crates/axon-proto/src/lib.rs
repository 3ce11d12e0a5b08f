//! Wire contract for the Axon client.
//!
//! Everything that crosses the network boundary is described here: branded
//! identifiers, the wire entities shared with the room service, and the
//! structural validators that stand between raw JSON and application logic.
//!
//! # Components
//!
//! - [`RoomId`] / [`UserId`]: UUID-shaped identifiers that cannot be mixed up
//! - [`Room`], [`User`], [`CreateRoomRequest`]: wire entities
//! - [`validate`]: per-entity validators producing branded values
//!
//! Validators are pure and synchronous. No code outside this crate can
//! produce a branded identifier without going through a parse or a validator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ids;
mod models;
pub mod validate;

pub use ids::{IdParseError, RoomId, UserId};
pub use models::{CreateRoomRequest, Room, User};
pub use validate::{FieldViolation, ValidationError};
