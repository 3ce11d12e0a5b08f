//! Fuzz target for the schema registry.
//!
//! Prevent unvalidated data from crossing the API boundary via validator
//! bugs.
//!
//! # Strategy
//!
//! - Arbitrary bytes: exercise the JSON decode + validate pipeline exactly
//!   as the API boundary runs it
//! - Re-validation: anything a validator accepts must re-serialize and
//!   re-validate to an equal value
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary input
//! - Validation is idempotent for accepted values
//! - Branded identifiers in accepted values always carry a UUID shape

#![no_main]

use libfuzzer_sys::fuzz_target;

use axon_proto::validate;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Ok(room) = validate::room(&value) {
        let reserialized = serde_json::to_value(&room).expect("accepted room serializes");
        let again = validate::room(&reserialized).expect("accepted room re-validates");
        assert_eq!(room, again);
    }

    let _ = validate::user(&value);
    let _ = validate::create_room_request(&value);
});
