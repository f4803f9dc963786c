use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pool_sim::{load_config, run_match, RunOptions};
use tracing_subscriber::EnvFilter;

/// Play 8-ball matches between two bots without a window
#[derive(Debug, Parser)]
#[command(name = "pool-sim", version, about)]
struct Args {
    /// Seed for the bots' random choices
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of matches to play back to back
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Give up on a match after this many frames
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,

    /// JSON table configuration; defaults are used for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run at the configured tick rate instead of as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let mut decided = 0;
    for round in 0..args.matches {
        let options = RunOptions {
            seed: args.seed.wrapping_add(u64::from(round)),
            max_frames: args.max_ticks,
            realtime: args.realtime,
        };
        let summary = run_match(config.clone(), &options);
        if summary.finished() {
            decided += 1;
        } else {
            tracing::warn!(round, frames = summary.frames, "match hit the frame cap");
        }
    }

    tracing::info!(played = args.matches, decided, "done");
    Ok(())
}
