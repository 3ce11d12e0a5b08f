//! Workspace root package.
//!
//! Exists only to host shared dev tooling (git hooks via cargo-husky).
//! All functionality lives in the `crates/` members.
