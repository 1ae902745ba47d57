//! Restoring saved sessions.
//!
//! Adventure content can change between two turns of the same player. A
//! saved session whose place no longer exists is put back at the start as a
//! new session rather than failing every following turn.

use ab_core::{PlaceGraph, SessionState, SessionStatus};

/// Produce the state for the next turn from whatever the front end saved.
pub fn restore(graph: &PlaceGraph, saved: Option<SessionState>, record_id: &str) -> SessionState {
    match saved {
        None => {
            tracing::debug!(record_id, "starting a new session");
            SessionState::new(record_id)
        }
        Some(mut state) if !graph.contains(&state.current_place_id) => {
            tracing::warn!(
                record_id = %state.record_id,
                place = %state.current_place_id,
                "saved place no longer exists; starting over"
            );
            state.reset();
            state
        }
        Some(mut state) => {
            state.status = SessionStatus::Restored;
            state
        }
    }
}
