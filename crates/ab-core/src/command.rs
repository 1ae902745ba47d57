//! The closed set of player commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// A player command.
///
/// Variants are declared in their canonical order: the numbered options, then
/// the yes/no answers, then the optional commands. Exported adventures list
/// choices in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Command {
    /// Option 1.
    OptionOne,
    /// Option 2.
    OptionTwo,
    /// Option 3.
    OptionThree,
    /// Option 4.
    OptionFour,
    /// Option 5.
    OptionFive,
    /// Option 6.
    OptionSix,
    /// Option 7.
    OptionSeven,
    /// Option 8.
    OptionEight,
    /// Option 9.
    OptionNine,
    /// Affirmative answer.
    Yes,
    /// Negative answer.
    No,
    /// Describe the current place again.
    Describe,
    /// Repeat the instructions of the current place.
    Help,
    /// Ask for a hint.
    Hint,
    /// Start the adventure over.
    Restart,
    /// End the session.
    Quit,
}

impl Command {
    /// Every command, in canonical order.
    pub const ALL: [Command; 16] = [
        Self::OptionOne,
        Self::OptionTwo,
        Self::OptionThree,
        Self::OptionFour,
        Self::OptionFive,
        Self::OptionSix,
        Self::OptionSeven,
        Self::OptionEight,
        Self::OptionNine,
        Self::Yes,
        Self::No,
        Self::Describe,
        Self::Help,
        Self::Hint,
        Self::Restart,
        Self::Quit,
    ];

    /// Parse a command, ignoring case and surrounding whitespace.
    ///
    /// Numbered options accept `OptionOne`, `One`, and `1` spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "optionone" | "one" | "1" => Some(Self::OptionOne),
            "optiontwo" | "two" | "2" => Some(Self::OptionTwo),
            "optionthree" | "three" | "3" => Some(Self::OptionThree),
            "optionfour" | "four" | "4" => Some(Self::OptionFour),
            "optionfive" | "five" | "5" => Some(Self::OptionFive),
            "optionsix" | "six" | "6" => Some(Self::OptionSix),
            "optionseven" | "seven" | "7" => Some(Self::OptionSeven),
            "optioneight" | "eight" | "8" => Some(Self::OptionEight),
            "optionnine" | "nine" | "9" => Some(Self::OptionNine),
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "describe" => Some(Self::Describe),
            "help" => Some(Self::Help),
            "hint" => Some(Self::Hint),
            "restart" => Some(Self::Restart),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The canonical name, as written in adventure files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OptionOne => "OptionOne",
            Self::OptionTwo => "OptionTwo",
            Self::OptionThree => "OptionThree",
            Self::OptionFour => "OptionFour",
            Self::OptionFive => "OptionFive",
            Self::OptionSix => "OptionSix",
            Self::OptionSeven => "OptionSeven",
            Self::OptionEight => "OptionEight",
            Self::OptionNine => "OptionNine",
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Describe => "Describe",
            Self::Help => "Help",
            Self::Hint => "Hint",
            Self::Restart => "Restart",
            Self::Quit => "Quit",
        }
    }

    /// Whether a place may leave this command undefined without the player
    /// being told the command was not understood.
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Describe | Self::Help | Self::Hint | Self::Restart | Self::Quit => true,
            Self::OptionOne
            | Self::OptionTwo
            | Self::OptionThree
            | Self::OptionFour
            | Self::OptionFive
            | Self::OptionSix
            | Self::OptionSeven
            | Self::OptionEight
            | Self::OptionNine
            | Self::Yes
            | Self::No => false,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VocabularyError::UnknownCommand(s.to_string()))
    }
}
