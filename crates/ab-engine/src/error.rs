//! Error types for the engine.

use std::fmt;

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Which lookup failed to find a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceLookup {
    /// The session's current place.
    Current,
    /// The target of a `Goto` action.
    GotoTarget,
    /// The start place, when restarting.
    Start,
}

impl fmt::Display for PlaceLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current place"),
            Self::GotoTarget => write!(f, "goto place"),
            Self::Start => write!(f, "start place"),
        }
    }
}

/// Errors that abort a turn.
///
/// Both indicate that the session state and the adventure content disagree
/// or that the content is broken. The turn produces no response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A place id does not exist in the graph.
    #[error("cannot find {lookup}: '{id}'")]
    PlaceNotFound {
        /// The missing place id.
        id: String,
        /// What was being looked up.
        lookup: PlaceLookup,
    },

    /// A `Pause` argument is not a non-negative number of seconds.
    #[error("delay must be a number of seconds: '{0}'")]
    InvalidDelayValue(String),
}
