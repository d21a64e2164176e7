//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ids::FixtureId;

/// The live data file every command reads.
#[derive(Debug, Args)]
pub struct LiveArgs {
    /// Gameweek live stats JSON document.
    #[clap(long, short)]
    pub live: PathBuf,
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-live", about = "Fantasy football live-scoring engine")]
pub struct FplLive {
    /// Config file (or set `FPL_LIVE_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging and progress output.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one manager's picks against live data.
    Score {
        #[clap(flatten)]
        live: LiveArgs,

        /// Manager picks JSON document.
        #[clap(long, short)]
        picks: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Head-to-head breakdown: differentials and common players.
    H2h {
        #[clap(flatten)]
        live: LiveArgs,

        /// The two managers' picks documents: `-p a.json -p b.json`.
        #[clap(long, short, num_args = 1, required = true)]
        picks: Vec<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Provisional bonus for fixtures in progress.
    Bonus {
        #[clap(flatten)]
        live: LiveArgs,

        /// Only this fixture.
        #[clap(long, short)]
        fixture: Option<FixtureId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score every picks document in a directory in parallel.
    Batch {
        #[clap(flatten)]
        live: LiveArgs,

        /// Directory of `*.json` picks documents.
        #[clap(long)]
        picks_dir: PathBuf,

        /// Worker threads (overrides config and `FPL_LIVE_THREADS`).
        #[clap(long, short)]
        threads: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
