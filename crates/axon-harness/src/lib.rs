//! Scripted fakes for testing the Axon client without a provider or server.
//!
//! - [`FakeProvider`]: hand-driven identity provider; tests push
//!   notifications and script sign-in/token outcomes
//! - [`StubTransport`]: queue of canned HTTP responses plus a record of
//!   every request that reached it
//!
//! Both are deterministic: a test controls every input and can assert on
//! every observable output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fake_provider;
mod stub_transport;

pub use fake_provider::{FakeProvider, identity};
pub use stub_transport::{RecordedRequest, StubTransport};
