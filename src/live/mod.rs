//! Live gameweek data: validated per-fixture stats and fixture metadata.
//!
//! Everything here is produced by the ingestion layer and handed to the
//! engine as read-only input:
//! - `stats`: raw and validated per-fixture player stats
//! - `fixture`: fixture metadata and status
//! - `gameweek`: the gameweek-wide container the pipeline reads from

pub mod fixture;
pub mod gameweek;
pub mod stats;

pub use fixture::{Fixture, FixtureStatus};
pub use gameweek::{Appearance, GameweekLive, LivePlayer};
pub use stats::{PlayerStatSnapshot, RawPlayerStats};
