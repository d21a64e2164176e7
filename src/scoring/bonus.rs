//! Provisional bonus points for fixtures still in progress.
//!
//! Official bonus is only published once a fixture finishes. While a fixture
//! is live, the three best BPS scores among players who have appeared get
//! 3/2/1. Ties use competition ranking: every member of a tie group gets the
//! award for the rank the group starts at, and the group uses up as many rank
//! positions as it has members. Two players tied first both get 3 and the
//! next player is ranked third (1 point).

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    live::{fixture::FixtureStatus, gameweek::GameweekLive},
    types::ids::{FixtureId, PlayerId},
};

#[cfg(test)]
mod tests;

/// One player's BPS standing in a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLiveEntry {
    pub player: PlayerId,
    pub minutes: u16,
    pub bps: i32,
}

const AWARDS: [u8; 3] = [3, 2, 1];

fn award_for_rank(rank: usize) -> Option<u8> {
    AWARDS.get(rank.checked_sub(1)?).copied()
}

/// Provisional bonus for one fixture.
///
/// Only `Started` fixtures produce awards; players absent from the returned
/// map get 0.
pub fn compute_bonus(roster: &[PlayerLiveEntry], status: FixtureStatus) -> BTreeMap<PlayerId, u8> {
    let mut awards = BTreeMap::new();
    if status != FixtureStatus::Started {
        return awards;
    }

    let mut ranked: Vec<&PlayerLiveEntry> = roster.iter().filter(|e| e.minutes > 0).collect();
    ranked.sort_by(|a, b| b.bps.cmp(&a.bps).then(a.player.cmp(&b.player)));

    let mut rank = 1;
    for group in ranked.chunk_by(|a, b| a.bps == b.bps) {
        let Some(award) = award_for_rank(rank) else {
            break;
        };
        awards.extend(group.iter().map(|e| (e.player, award)));
        rank += group.len();
    }
    awards
}

/// Provisional bonus for every live fixture of a gameweek.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionalBonus {
    fixtures: BTreeMap<FixtureId, BTreeMap<PlayerId, u8>>,
}

impl ProvisionalBonus {
    /// Award for a player in a fixture; 0 when none.
    pub fn get(&self, fixture: FixtureId, player: PlayerId) -> u8 {
        self.fixtures
            .get(&fixture)
            .and_then(|awards| awards.get(&player))
            .copied()
            .unwrap_or(0)
    }

    pub fn fixture(&self, fixture: FixtureId) -> Option<&BTreeMap<PlayerId, u8>> {
        self.fixtures.get(&fixture)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FixtureId, &BTreeMap<PlayerId, u8>)> {
        self.fixtures.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

/// Rank BPS in every started fixture of the gameweek.
pub fn provisional_bonus(live: &GameweekLive) -> ProvisionalBonus {
    let fixtures = live
        .fixtures()
        .filter(|f| f.status == FixtureStatus::Started)
        .map(|f| {
            let awards = compute_bonus(&live.fixture_roster(f.id), f.status);
            debug!("fixture {}: provisional bonus {:?}", f.id, awards);
            (f.id, awards)
        })
        .collect();
    ProvisionalBonus { fixtures }
}
