//! # crier-core
//!
//! Domain vocabulary for the crier notification composer.
//!
//! This crate holds the types every other crier crate speaks:
//!
//! - **Game snapshot**: [`game::GameDetails`] as fetched from the game service
//! - **History**: [`history::HistoryEntry`] with [`history::MessageKind`] and
//!   [`history::AnswerResult`] wire tags
//! - **Transitions**: [`transition::Transition`], the closed set of notable
//!   state changes an invocation can report
//! - **Trigger**: [`message::IncomingMessage`], the host's invocation input
//!
//! Foundation crate. Depended on by all other crier crates.

pub mod game;
pub mod history;
pub mod message;
pub mod transition;

pub use game::GameDetails;
pub use history::{AnswerResult, HistoryEntry, MessageKind};
pub use message::IncomingMessage;
pub use transition::Transition;
