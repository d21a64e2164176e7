//! Fantasy Football Live-Scoring Library
//!
//! A deterministic scoring engine for fantasy football squads: it turns live
//! per-fixture player stats into authoritative gameweek totals and breaks
//! head-to-head matches down into the players that decided them.
//!
//! ## Features
//!
//! - **Points**: position-dependent scoring with a configurable rules table
//! - **Provisional Bonus**: 3/2/1 bonus from live BPS with tie handling
//! - **Auto-Substitution**: formation-legal bench substitutions
//! - **Chips**: triple captain, bench boost and captaincy handover
//! - **Head-to-Head**: pure, position, captain and transfer-hit differentials
//! - **Batch Scoring**: many managers in parallel on a rayon pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_live::{
//!     config::Config,
//!     engine::score_squad,
//!     models::{GameweekLiveDoc, ManagerPicksDoc},
//!     live::GameweekLive,
//! };
//!
//! # fn example(live_json: &str, picks_json: &str) -> fpl_live::Result<()> {
//! let live = GameweekLive::try_from(GameweekLiveDoc::from_json(live_json)?)?;
//! let picks = ManagerPicksDoc::from_json(picks_json)?.into_picks(&live)?;
//!
//! let scored = score_squad(&live, &picks, &Config::default())?;
//! println!("{} scored {}", scored.name, scored.score.net_total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point at a config file and size the batch worker pool:
//! ```bash
//! export FPL_LIVE_CONFIG=~/fpl/config.json
//! export FPL_LIVE_THREADS=4
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod h2h;
pub mod live;
pub mod models;
pub mod scoring;
pub mod squad;
pub mod types;

// Re-export commonly used types
pub use engine::{score_managers, score_squad, ManagerPicks, ScoredSquad};
pub use error::{FplError, Result};
pub use h2h::{reconcile, MatchBreakdown};
pub use live::{GameweekLive, PlayerStatSnapshot};
pub use squad::{Squad, SquadBuilder};
pub use types::{
    chip::ChipState,
    ids::{FixtureId, Gameweek, ManagerId, PlayerId, TeamId},
    position::Position,
};

pub const CONFIG_ENV_VAR: &str = "FPL_LIVE_CONFIG";
pub const THREADS_ENV_VAR: &str = "FPL_LIVE_THREADS";
