//! Per-player session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::START_PLACE_ID;

/// Where a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Freshly created, or reset after the saved place became invalid.
    #[default]
    New,
    /// At least one turn has been played in this session.
    InProgress,
    /// Loaded from a saved record and not yet played.
    Restored,
}

/// A player's progress through an adventure.
///
/// Front ends own and persist this value. Field names serialize in
/// camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Opaque key of the player or session this state belongs to.
    pub record_id: String,
    /// Id of the place the player is at. Must exist in the active graph.
    pub current_place_id: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: SessionStatus,
    /// Number of commands executed, including unrecognized ones.
    #[serde(default)]
    pub commands_issued: u32,
    /// Number of restarts.
    #[serde(default)]
    pub attempts: u32,
    /// When the current attempt started.
    pub start: DateTime<Utc>,
    /// When the player reached an ending, if they did.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Create a new session at the start place.
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            current_place_id: START_PLACE_ID.to_string(),
            status: SessionStatus::New,
            commands_issued: 0,
            attempts: 0,
            start: Utc::now(),
            end: None,
        }
    }

    /// Create a new session with a random record id.
    pub fn anonymous() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Put the session back at the start place as a new session. The record
    /// id and counters are kept.
    pub fn reset(&mut self) {
        self.current_place_id = START_PLACE_ID.to_string();
        self.status = SessionStatus::New;
        self.start = Utc::now();
        self.end = None;
    }

    /// Record that a turn was played.
    pub fn mark_in_progress(&mut self) {
        self.status = SessionStatus::InProgress;
    }

    /// Whether the player reached an ending in the current attempt.
    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }
}
