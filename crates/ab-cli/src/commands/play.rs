//! Interactive play on stdin/stdout.

use std::io::{self, BufRead};
use std::path::Path;

use ab_core::Command;

use crate::config::PlayConfig;
use crate::player::Player;
use crate::render::ConsoleRenderer;

pub fn run(file: &Path, state: Option<&Path>, config: PlayConfig) -> Result<(), String> {
    let graph = super::load_adventure(file)?;
    let renderer = ConsoleRenderer::new(io::stdout(), config);
    let mut player = Player::open(&graph, state, renderer)?;

    if player.begin()? {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        player
            .renderer()
            .prompt()
            .map_err(|e| format!("cannot write output: {e}"))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("cannot read input: {e}"))?;
        if read == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match Command::parse(text) {
            Some(command) => {
                if player.turn(command)? {
                    break;
                }
            }
            None => player.not_understood()?,
        }
    }

    Ok(())
}
