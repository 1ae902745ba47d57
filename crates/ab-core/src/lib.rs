//! Core types for AdventureBot: the command and action vocabulary, the place
//! graph, per-player session state, and the responses the engine emits.
//!
//! This crate is plain data. Parsing adventure files lives in `ab-loader`,
//! and interpreting commands against a graph lives in `ab-engine`. A
//! [`PlaceGraph`] can also be constructed programmatically.

/// Authorable actions bound to a choice.
pub mod action;
/// The closed set of player commands.
pub mod command;
/// Vocabulary parsing errors.
pub mod error;
/// The place graph an adventure is made of.
pub mod graph;
/// Places and their choices.
pub mod place;
/// Directives produced for front ends to render.
pub mod response;
/// Mutable per-player progress.
pub mod state;

pub use action::{Action, ActionKind};
pub use command::Command;
pub use error::{VocabularyError, VocabularyResult};
pub use graph::{PlaceGraph, START_PLACE_ID};
pub use place::Place;
pub use response::Response;
pub use state::{SessionState, SessionStatus};
