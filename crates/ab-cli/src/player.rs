//! A terminal play session: one graph, one saved state, one renderer.

use std::io::Write;
use std::path::{Path, PathBuf};

use ab_core::{Command, PlaceGraph, Response, SessionState, SessionStatus};
use ab_engine::Engine;

use crate::render::{APOLOGY, ConsoleRenderer};

/// Record id for sessions played in the terminal.
const CONSOLE_RECORD_ID: &str = "console";

pub struct Player<'g, W> {
    engine: Engine<'g>,
    state: SessionState,
    renderer: ConsoleRenderer<W>,
    state_path: Option<PathBuf>,
}

impl<'g, W: Write> Player<'g, W> {
    /// Resume from `state_path` if it holds a usable session, otherwise start
    /// a new one.
    pub fn open(
        graph: &'g PlaceGraph,
        state_path: Option<&Path>,
        renderer: ConsoleRenderer<W>,
    ) -> Result<Self, String> {
        let saved = match state_path {
            Some(path) => read_state(path)?,
            None => None,
        };
        let state = ab_engine::session::restore(graph, saved, CONSOLE_RECORD_ID);

        Ok(Self {
            engine: Engine::new(graph),
            state,
            renderer,
            state_path: state_path.map(Path::to_path_buf),
        })
    }

    /// Greet the player: a new session restarts, a restored one describes
    /// where the player left off. Returns `true` if the session ended.
    pub fn begin(&mut self) -> Result<bool, String> {
        let opening = match self.state.status {
            SessionStatus::Restored | SessionStatus::InProgress => Command::Describe,
            SessionStatus::New => Command::Restart,
        };
        self.turn(opening)
    }

    /// Play one command. Returns `true` if the session ended.
    pub fn turn(&mut self, command: Command) -> Result<bool, String> {
        let response = match self.engine.execute(&mut self.state, command) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, %command, place = %self.state.current_place_id, "turn failed");
                Response::Say(APOLOGY.to_string())
            }
        };
        self.state.mark_in_progress();
        self.show(&response)?;
        self.save()?;
        Ok(response.is_bye())
    }

    /// Handle input that is not a command, without consulting the engine.
    pub fn not_understood(&mut self) -> Result<(), String> {
        self.show(&Response::NotUnderstood)
    }

    pub fn renderer(&mut self) -> &mut ConsoleRenderer<W> {
        &mut self.renderer
    }

    #[cfg(test)]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn show(&mut self, response: &Response) -> Result<(), String> {
        ab_engine::visit(response, &mut self.renderer).map_err(|e| format!("cannot write output: {e}"))
    }

    fn save(&self) -> Result<(), String> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.state)
            .map_err(|e| format!("cannot serialize session: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))
    }
}

/// Read a saved session. A missing file is a new session; an unreadable one
/// is logged and treated as new.
fn read_state(path: &Path) -> Result<Option<SessionState>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    match serde_json::from_str(&text) {
        Ok(state) => Ok(Some(state)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
            Ok(None)
        }
    }
}
