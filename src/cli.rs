//! Command-line interface for cupkit.

use clap::{Args, Parser, Subcommand};

use tetris_cupkit::harness::WaitPolicy;
use tetris_cupkit::sandbox::PlayerKind;

/// Tetris cupkit - run autoplayers through the validity and timed harnesses
#[derive(Parser, Debug)]
#[command(name = "cupkit")]
#[command(about = "Validity and timed-playout harnesses for Tetris autoplayers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a batch of timed playouts and print their summary
    Sample {
        /// Number of playouts (default: CUPKIT_PLAYOUTS or 5)
        #[arg(short = 'n', long)]
        playouts: Option<usize>,

        /// Seeder seed (default: CUPKIT_SEED or the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Step cap per playout (default: CUPKIT_STEP_LIMIT or 5000)
        #[arg(long)]
        step_limit: Option<u64>,

        /// Think-time budget per playout in ms (default: CUPKIT_THINK_TIME_MS or 50000)
        #[arg(long)]
        think_ms: Option<u64>,

        /// Wait bound per decision: total or remaining (default: CUPKIT_WAIT_POLICY or total)
        #[arg(long)]
        wait_policy: Option<WaitPolicy>,

        #[command(flatten)]
        player: PlayerArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive a bounded number of moves per seed and fail on the first invalid one
    Validate {
        /// Seeds to run (default: the regression fixtures)
        #[arg(short, long = "seed")]
        seeds: Vec<u64>,

        /// Moves per seed
        #[arg(long, default_value = "100")]
        max_steps: u64,

        #[command(flatten)]
        player: PlayerArgs,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Which sandbox player to run
#[derive(Args, Debug)]
pub struct PlayerArgs {
    /// seeded, down or stall
    #[arg(short, long, default_value = "seeded")]
    pub player: PlayerKind,

    /// Move script (e.g. "left,left,down"); overrides --player
    #[arg(long)]
    pub script: Option<String>,
}
