//! # crier-client
//!
//! Read-only HTTP client for the game service.
//!
//! Two endpoints, both JSON: the current game snapshot and the ordered
//! question/guess log. Failures come back as a typed [`FetchError`] so the
//! engine can decide what "unavailable" means for each payload instead of
//! unwinding the whole invocation.

mod client;
mod error;

pub use client::GameClient;
pub use error::FetchError;
