//! Terminal player for AdventureBot adventures.

mod commands;
mod config;
mod player;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::PlayConfig;

#[derive(Parser)]
#[command(
    name = "ab",
    about = "AdventureBot: play choose-your-own-adventure files in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively
    Play {
        /// Adventure file (.json, .yaml, or .yml)
        file: PathBuf,

        /// Save progress to this file after every turn and resume from it
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Do not wait on pauses
        #[arg(long)]
        no_delay: bool,

        /// Type text out one character at a time
        #[arg(long)]
        typewriter: bool,

        /// Base URL prepended to sound ids
        #[arg(long)]
        sounds: Option<String>,
    },

    /// Run a fixed sequence of commands and print the output
    Run {
        /// Adventure file (.json, .yaml, or .yml)
        file: PathBuf,

        /// Commands to execute in order (e.g. 1 2 yes quit)
        #[arg(required = true)]
        commands: Vec<String>,

        /// Save progress to this file and resume from it
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Validate an adventure file and summarize its places
    Check {
        /// Adventure file (.json, .yaml, or .yml)
        file: PathBuf,
    },

    /// Write an adventure back out as JSON or YAML
    Export {
        /// Adventure file (.json, .yaml, or .yml)
        file: PathBuf,

        /// Output format: json, yaml
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            file,
            state,
            no_delay,
            typewriter,
            sounds,
        } => {
            let mut config = PlayConfig::default()
                .with_delays(!no_delay)
                .with_typewriter(typewriter);
            if let Some(url) = sounds {
                config = config.with_sound_base_url(url);
            }
            commands::play::run(&file, state.as_deref(), config)
        }
        Commands::Run {
            file,
            commands,
            state,
        } => commands::run::run(&file, &commands, state.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
