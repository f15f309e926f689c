#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a Lane Defence wave in the terminal.

mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lane_defence_simulation::{GameEngine, DEFAULT_MAX_TICKS};

/// Plays a single-lane tower defence wave and prints every tick.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML scenario describing the track, towers and spawns. Plays the demo wave when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Maximum number of ticks to simulate before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,
}

/// Entry point for the Lane Defence command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => scenario::load(path)?,
        None => scenario::demo(),
    };
    log::info!(
        "loaded scenario with {} towers and {} spawns on a track of {}",
        scenario.towers.len(),
        scenario.spawns.len(),
        scenario.track_length
    );

    let mut engine = GameEngine::from_scenario(scenario).context("invalid scenario")?;

    println!("Starting demo wave...");
    let mut elapsed = 0;
    while !engine.is_terminal() && elapsed < cli.max_ticks {
        let events = engine.step();
        elapsed += 1;

        println!("{}", report::format_state(engine.state()));
        for event in &events {
            println!("  - {event}");
        }
    }

    if !engine.is_terminal() {
        match engine.next_spawn_tick() {
            Some(tick) => log::warn!(
                "stopped after {elapsed} ticks without a result; next spawn due at tick {tick}"
            ),
            None => log::warn!("stopped after {elapsed} ticks without a result"),
        }
    }
    println!("{}", report::verdict(engine.outcome()));
    Ok(())
}
