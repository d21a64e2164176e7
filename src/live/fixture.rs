//! Fixture metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ids::{FixtureId, TeamId};

/// Where a fixture is in its lifecycle.
///
/// Governs which bonus applies: `Started` fixtures get provisional bonus from
/// BPS, `Finished` fixtures carry the official bonus, `NotStarted` fixtures
/// award nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FixtureStatus {
    #[default]
    NotStarted,
    Started,
    Finished,
}

impl FixtureStatus {
    /// Build from the feed's `started` / `finished` flags.
    pub fn from_flags(started: bool, finished: bool) -> Self {
        match (started, finished) {
            (_, true) => FixtureStatus::Finished,
            (true, false) => FixtureStatus::Started,
            (false, false) => FixtureStatus::NotStarted,
        }
    }
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FixtureStatus::NotStarted => "not started",
            FixtureStatus::Started => "live",
            FixtureStatus::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub team_h: TeamId,
    pub team_a: TeamId,
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn involves(&self, team: TeamId) -> bool {
        self.team_h == team || self.team_a == team
    }
}
