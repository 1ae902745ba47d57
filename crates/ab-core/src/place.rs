use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::command::Command;

/// A location in the adventure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Unique key within the graph.
    pub id: String,
    /// Text spoken when the player arrives.
    pub description: Option<String>,
    /// Text spoken on arrival after the description, and on `Help`.
    pub instructions: Option<String>,
    /// Whether reaching this place ends the adventure.
    pub finished: bool,
    /// Ordered actions per command.
    pub choices: BTreeMap<Command, Vec<Action>>,
}

impl Place {
    /// Create an empty place.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            instructions: None,
            finished: false,
            choices: BTreeMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Mark the place as an ending.
    pub fn finished(mut self) -> Self {
        self.finished = true;
        self
    }

    /// Bind a list of actions to a command, replacing any existing binding.
    pub fn with_choice(mut self, command: Command, actions: Vec<Action>) -> Self {
        self.choices.insert(command, actions);
        self
    }

    /// The actions bound to `command`, if any.
    pub fn choice(&self, command: Command) -> Option<&[Action]> {
        self.choices.get(&command).map(Vec::as_slice)
    }
}
