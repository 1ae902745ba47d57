//! Scripted play: a fixed list of commands, no prompts and no pauses.

use std::io;
use std::path::Path;

use ab_core::Command;

use crate::config::PlayConfig;
use crate::player::Player;
use crate::render::ConsoleRenderer;

pub fn run(file: &Path, words: &[String], state: Option<&Path>) -> Result<(), String> {
    let commands = words
        .iter()
        .map(|word| Command::parse(word).ok_or_else(|| format!("unknown command: {word}")))
        .collect::<Result<Vec<_>, _>>()?;

    let graph = super::load_adventure(file)?;
    let renderer = ConsoleRenderer::new(io::stdout(), PlayConfig::scripted());
    let mut player = Player::open(&graph, state, renderer)?;

    if player.begin()? {
        return Ok(());
    }
    for command in commands {
        tracing::debug!(%command, "running");
        if player.turn(command)? {
            break;
        }
    }

    Ok(())
}
