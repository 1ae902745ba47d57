use std::time::Duration;

use chrono::{DateTime, Utc};

use ab_core::{Action, Command, Place, PlaceGraph, Response, START_PLACE_ID, SessionState};

use crate::error::{EngineError, EngineResult, PlaceLookup};

/// Run one command against `graph`, updating `state`.
pub fn execute(
    graph: &PlaceGraph,
    state: &mut SessionState,
    command: Command,
) -> EngineResult<Response> {
    Engine::new(graph).execute(state, command)
}

/// Interpreter bound to one adventure.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'g> {
    graph: &'g PlaceGraph,
}

impl<'g> Engine<'g> {
    /// Create an engine for `graph`.
    pub fn new(graph: &'g PlaceGraph) -> Self {
        Self { graph }
    }

    /// The adventure this engine runs.
    pub fn graph(&self) -> &'g PlaceGraph {
        self.graph
    }

    /// Run one command, stamping restarts and endings with the current time.
    pub fn execute(&self, state: &mut SessionState, command: Command) -> EngineResult<Response> {
        self.execute_at(state, command, Utc::now())
    }

    /// Run one command, stamping restarts and endings with `now`.
    ///
    /// The place the session ends up in is only written back to `state` once
    /// the whole command succeeded. On error the only change to `state` is
    /// the incremented command counter.
    pub fn execute_at(
        &self,
        state: &mut SessionState,
        command: Command,
        now: DateTime<Utc>,
    ) -> EngineResult<Response> {
        state.commands_issued = state.commands_issued.saturating_add(1);
        tracing::debug!(place = %state.current_place_id, %command, "executing command");

        let mut place = self.resolve(&state.current_place_id, PlaceLookup::Current)?;
        let mut responses = Vec::new();
        let mut arrived: Option<&Place> = None;
        let mut reached_end = false;

        let choice = place.choice(command);
        match choice {
            Some(actions) => {
                for action in actions {
                    tracing::trace!(?action, "running action");
                    match action {
                        Action::Goto(target) => {
                            let next = self.resolve(target, PlaceLookup::GotoTarget)?;
                            if next.id != place.id {
                                tracing::debug!(from = %place.id, to = %next.id, "moving");
                                place = next;
                                arrived = Some(next);
                                describe(place, &mut responses);
                                if place.finished {
                                    tracing::debug!(place = %place.id, "reached an ending");
                                    responses.push(Response::Finished);
                                    reached_end = true;
                                }
                            }
                        }
                        Action::Say(text) => responses.push(Response::Say(text.clone())),
                        Action::Pause(value) => responses.push(Response::Delay(parse_delay(value)?)),
                        Action::Play(sound) => responses.push(Response::Play(sound.clone())),
                    }
                }
            }
            None if !command.is_optional() => responses.push(Response::NotUnderstood),
            None => {}
        }

        let mut restarted = false;
        match command {
            Command::Describe => describe(place, &mut responses),
            Command::Help => {
                if let Some(instructions) = &place.instructions {
                    responses.push(Response::Say(instructions.clone()));
                }
            }
            // Hints have no built-in effect; authors bind them per place.
            Command::Hint => {}
            Command::Restart => {
                restarted = true;
                let navigated = choice.is_some_and(|actions| actions.iter().any(Action::is_goto));
                if !navigated {
                    place = self.resolve(START_PLACE_ID, PlaceLookup::Start)?;
                }
                // A Goto in the restart choice already described where it led.
                let already_described = arrived.is_some_and(|p| p.id == place.id);
                if !already_described {
                    describe(place, &mut responses);
                }
            }
            Command::Quit => responses.push(Response::Bye),
            Command::OptionOne
            | Command::OptionTwo
            | Command::OptionThree
            | Command::OptionFour
            | Command::OptionFive
            | Command::OptionSix
            | Command::OptionSeven
            | Command::OptionEight
            | Command::OptionNine
            | Command::Yes
            | Command::No => {}
        }

        state.current_place_id = place.id.clone();
        if reached_end {
            state.end = Some(now);
        }
        if restarted {
            state.attempts = state.attempts.saturating_add(1);
            state.start = now;
            state.end = None;
        }

        Ok(Response::from_list(responses))
    }

    fn resolve(&self, id: &str, lookup: PlaceLookup) -> EngineResult<&'g Place> {
        self.graph.get(id).ok_or_else(|| EngineError::PlaceNotFound {
            id: id.to_string(),
            lookup,
        })
    }
}

/// Description, then instructions, skipping whichever is absent.
fn describe(place: &Place, responses: &mut Vec<Response>) {
    responses.extend(
        [&place.description, &place.instructions]
            .into_iter()
            .flatten()
            .map(|text| Response::Say(text.clone())),
    );
}

fn parse_delay(value: &str) -> EngineResult<Duration> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| EngineError::InvalidDelayValue(value.to_string()))
}
