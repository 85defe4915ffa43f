// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ledge developer CLI.
//!
//! Runs the physics pipeline headless for debugging and regression checks.
//!
//! # Usage
//! ```text
//! ledge replay --level <file> --script <file> [--config <file>] [--json]
//! ledge inspect-level --level <file> [--json]
//! ledge check-config [--config <file>] [--save]
//! ```
//!
//! Exits with code `0` on success and non-zero on any load or validation
//! error.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod load;
mod report;
mod script;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ledge_core::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::load::{config_store, load_config, read_level};
use crate::report::{ConfigReport, LevelReport, ReplayReport};
use crate::script::Script;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ledge physics developer CLI")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an intent script against a level and report the final state
    Replay {
        /// ASCII level file
        #[arg(long)]
        level: PathBuf,
        /// JSON intent script: `[{ "intent": {...}, "ticks": n }, ...]`
        #[arg(long)]
        script: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a level's dimensions, bounds and spawn point
    InspectLevel {
        /// ASCII level file
        #[arg(long)]
        level: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate and print the effective physics tunables
    CheckConfig {
        #[command(flatten)]
        config: ConfigArgs,
        /// Write the effective tunables to the config store
        #[arg(long)]
        save: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Physics config JSON file; falls back to the config store, then defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Config store directory (defaults to the platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Replay {
            level,
            script,
            config,
            json,
        } => replay(&level, &script, &config, json),
        Command::InspectLevel { level, json } => {
            let map = read_level(&level)?;
            emit(&LevelReport::new(&level, &map), json)
        }
        Command::CheckConfig { config, save, json } => check_config(&config, save, json),
    }
}

fn replay(level: &Path, script: &Path, config: &ConfigArgs, json: bool) -> Result<()> {
    let map = read_level(level)?;
    let (physics, source) = load_config(config.config.as_deref(), config.config_dir.as_deref())?;
    let script = Script::read(script)?;
    info!(
        level = %level.display(),
        config = %source,
        steps = script.steps().len(),
        ticks = script.total_ticks(),
        "replaying script"
    );

    let mut world = World::new(physics, map)
        .with_context(|| format!("cannot build a world for {}", level.display()))?;
    let mut faults = 0usize;
    for intent in script.intents() {
        world.advance(intent);
        faults += world.last_faults().len();
    }
    emit(&ReplayReport::new(&world, faults), json)
}

fn check_config(args: &ConfigArgs, save: bool, json: bool) -> Result<()> {
    let (physics, source) = load_config(args.config.as_deref(), args.config_dir.as_deref())?;
    physics
        .validate()
        .with_context(|| format!("invalid physics config from {source}"))?;
    if save {
        let service = ledge_config::ConfigService::new(config_store(args.config_dir.as_deref())?);
        service
            .save(ledge_config::PHYSICS_KEY, &physics)
            .context("cannot save physics config")?;
        info!(config = %source, "saved physics config");
    }
    emit(&ConfigReport::new(&physics, &source), json)
}

fn emit<R: report::Render>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.table());
    }
    Ok(())
}
