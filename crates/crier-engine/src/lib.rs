//! # crier-engine
//!
//! State-change detection and notification composition.
//!
//! One [`GameUpdateProvider::provide`] call runs the whole pipeline:
//! trigger check → fetch game snapshot and history → summary gate →
//! transition classification → directive composition → marker persistence.
//! The result is either an instructional text for a downstream poster or an
//! empty string when nothing noteworthy happened.
//!
//! Gating rests on two persisted markers: the last-seen game identity and
//! the last-seen count of summarizable history entries. Markers only move
//! once the invocation has gotten far enough to make a notification
//! decision; a failed fetch leaves them untouched so a real transition is
//! reported on the next successful poll.

mod error;
mod provider;
mod summary;
mod update;

pub use error::EngineError;
pub use provider::GameUpdateProvider;
pub use summary::summarize_history;
pub use update::{classify, compose, POST_MARKER};

/// Marker keys, namespaced per deployment.
pub mod keys {
    /// Identity of the game seen by the previous invocation.
    pub const LAST_GAME_ADDRESS: &str = "crier/last_game_address";
    /// Count of relevant (question/guess) history entries last summarized.
    pub const RELEVANT_COUNT: &str = "crier/relevant_message_count";
}
