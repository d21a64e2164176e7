//! Gameweek-wide live data the scoring pipeline reads from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    fixture::{Fixture, FixtureStatus},
    stats::PlayerStatSnapshot,
};
use crate::{
    error::{FplError, Result},
    scoring::bonus::PlayerLiveEntry,
    types::{
        ids::{FixtureId, Gameweek, PlayerId, TeamId},
        position::Position,
    },
};


/// One player's stats in one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub fixture: FixtureId,
    pub stats: PlayerStatSnapshot,
}

/// A player's live record for the gameweek.
///
/// Blank gameweeks have no appearances; double gameweeks have two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivePlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team: Option<TeamId>,
    pub appearances: Vec<Appearance>,
}

impl LivePlayer {
    pub fn minutes(&self) -> u32 {
        self.appearances
            .iter()
            .map(|a| u32::from(a.stats.minutes))
            .sum()
    }

    pub fn played(&self) -> bool {
        self.minutes() > 0
    }
}

/// All live data for a single gameweek.
#[derive(Debug, Clone, Default)]
pub struct GameweekLive {
    pub gameweek: Option<Gameweek>,
    fixtures: BTreeMap<FixtureId, Fixture>,
    players: BTreeMap<PlayerId, LivePlayer>,
}

impl GameweekLive {
    pub fn new(
        gameweek: Option<Gameweek>,
        fixtures: impl IntoIterator<Item = Fixture>,
        players: impl IntoIterator<Item = LivePlayer>,
    ) -> Self {
        Self {
            gameweek,
            fixtures: fixtures.into_iter().map(|f| (f.id, f)).collect(),
            players: players.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.values()
    }

    pub fn players(&self) -> impl Iterator<Item = &LivePlayer> {
        self.players.values()
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.get(&id)
    }

    /// Strict fixture lookup for callers that named a specific fixture.
    pub fn require_fixture(&self, id: FixtureId) -> Result<&Fixture> {
        self.fixture(id)
            .ok_or(FplError::MissingFixture { fixture: id })
    }

    /// Status of a fixture; unknown fixtures have not started.
    pub fn fixture_status(&self, id: FixtureId) -> FixtureStatus {
        self.fixture(id).map(|f| f.status).unwrap_or_default()
    }

    pub fn player(&self, id: PlayerId) -> Option<&LivePlayer> {
        self.players.get(&id)
    }

    /// A player's appearances; a player with no live data has none.
    pub fn appearances(&self, id: PlayerId) -> &[Appearance] {
        self.player(id)
            .map(|p| p.appearances.as_slice())
            .unwrap_or(&[])
    }

    pub fn minutes(&self, id: PlayerId) -> u32 {
        self.player(id).map(LivePlayer::minutes).unwrap_or(0)
    }

    pub fn played(&self, id: PlayerId) -> bool {
        self.minutes(id) > 0
    }

    /// Everyone with an appearance in the given fixture, for bonus ranking.
    pub fn fixture_roster(&self, fixture: FixtureId) -> Vec<PlayerLiveEntry> {
        self.players
            .values()
            .flat_map(|p| {
                p.appearances
                    .iter()
                    .filter(move |a| a.fixture == fixture)
                    .map(move |a| PlayerLiveEntry {
                        player: p.id,
                        minutes: a.stats.minutes,
                        bps: a.stats.bps,
                    })
            })
            .collect()
    }
}
