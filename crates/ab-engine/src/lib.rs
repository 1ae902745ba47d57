//! Command interpreter for AdventureBot.
//!
//! The engine runs one player command against a [`PlaceGraph`] and a
//! [`SessionState`], returning the turn's [`Response`] and updating the
//! state in place. It performs no I/O and keeps no state of its own, so a
//! single graph can serve any number of sessions.
//!
//! ```
//! use ab_core::{Action, Command, Place, PlaceGraph, SessionState};
//!
//! let graph = PlaceGraph::new([
//!     Place::new("start").with_choice(Command::Yes, vec![Action::Goto("hall".into())]),
//!     Place::new("hall").with_description("A long hall."),
//! ]);
//! let mut state = SessionState::new("player");
//!
//! let response = ab_engine::execute(&graph, &mut state, Command::Yes).unwrap();
//! assert_eq!(response.said(), vec!["A long hall."]);
//! assert_eq!(state.current_place_id, "hall");
//! ```

/// The interpreter.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Restoring saved sessions against a graph.
pub mod session;
/// Push-style traversal of responses.
pub mod visit;

pub use engine::{Engine, execute};
pub use error::{EngineError, EngineResult, PlaceLookup};
pub use visit::{ResponseVisitor, visit};

#[doc(no_inline)]
pub use ab_core::{Command, PlaceGraph, Response, SessionState};
