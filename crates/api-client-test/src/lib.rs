//! Test helpers for crates using `api-client`. Do not use outside of tests.

mod api;
mod transport;

pub use api::start_api_mock;
pub use transport::ScriptedTransport;
