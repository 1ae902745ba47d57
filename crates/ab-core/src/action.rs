//! Authorable actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// The kind of an action, without its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Move the player to another place.
    Goto,
    /// Speak a line of text.
    Say,
    /// Pause for a number of seconds.
    Pause,
    /// Play a sound.
    Play,
}

impl ActionKind {
    /// Parse an action name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "goto" => Some(Self::Goto),
            "say" => Some(Self::Say),
            "pause" => Some(Self::Pause),
            "play" => Some(Self::Play),
            _ => None,
        }
    }

    /// The canonical name, as written in adventure files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goto => "Goto",
            Self::Say => "Say",
            Self::Pause => "Pause",
            Self::Play => "Play",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VocabularyError::UnknownAction(s.to_string()))
    }
}

/// A single authored effect, executed when a choice fires.
///
/// `Pause` keeps the literal from the adventure file. It is only parsed into
/// a duration when the action runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move to the place with this id.
    Goto(String),
    /// Speak this text.
    Say(String),
    /// Pause for this many seconds.
    Pause(String),
    /// Play the sound with this id.
    Play(String),
}

impl Action {
    /// Build an action from its kind and argument.
    pub fn new(kind: ActionKind, argument: impl Into<String>) -> Self {
        let argument = argument.into();
        match kind {
            ActionKind::Goto => Self::Goto(argument),
            ActionKind::Say => Self::Say(argument),
            ActionKind::Pause => Self::Pause(argument),
            ActionKind::Play => Self::Play(argument),
        }
    }

    /// The kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Goto(_) => ActionKind::Goto,
            Self::Say(_) => ActionKind::Say,
            Self::Pause(_) => ActionKind::Pause,
            Self::Play(_) => ActionKind::Play,
        }
    }

    /// The raw argument.
    pub fn argument(&self) -> &str {
        match self {
            Self::Goto(s) | Self::Say(s) | Self::Pause(s) | Self::Play(s) => s,
        }
    }

    /// Whether this action navigates.
    pub fn is_goto(&self) -> bool {
        matches!(self, Self::Goto(_))
    }
}
