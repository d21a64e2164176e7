//! Per-fixture player stats.
//!
//! The feed delivers stats as loosely-typed records. `RawPlayerStats` mirrors
//! that shape (signed, optional, defaulted) and `PlayerStatSnapshot` is the
//! validated form the scoring code works with.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FplError, Result};


/// Accept the clean sheet flag as either a bool or a 0/1 integer.
fn de_flag_as_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => i64::from(b),
        Flag::Int(i) => i,
    })
}

/// Stats for one player in one fixture, as delivered by the live feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPlayerStats {
    pub minutes: i64,
    pub goals_scored: i64,
    pub assists: i64,
    #[serde(alias = "clean_sheet", deserialize_with = "de_flag_as_i64")]
    pub clean_sheets: i64,
    pub goals_conceded: i64,
    pub own_goals: i64,
    pub penalties_saved: i64,
    pub penalties_missed: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub saves: i64,
    pub bonus: i64,
    pub bps: i64,
    #[serde(alias = "defensive_contributions")]
    pub defensive_contribution: i64,
}

/// Validated stats for one player in one fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStatSnapshot {
    pub minutes: u16,
    pub goals_scored: u16,
    pub assists: u16,
    pub clean_sheet: bool,
    pub goals_conceded: u16,
    pub own_goals: u16,
    pub penalties_saved: u16,
    pub penalties_missed: u16,
    pub yellow_cards: u16,
    pub red_cards: u16,
    pub saves: u16,
    /// Official bonus; only meaningful once the fixture is finished.
    pub bonus: u8,
    /// Bonus points system score. May be negative.
    pub bps: i32,
    pub defensive_contribution: u16,
}

fn count(field: &'static str, value: i64) -> Result<u16> {
    u16::try_from(value).map_err(|_| FplError::InvalidStat { field, value })
}

fn bounded(field: &'static str, value: i64, max: i64) -> Result<i64> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FplError::InvalidStat { field, value })
    }
}

impl TryFrom<RawPlayerStats> for PlayerStatSnapshot {
    type Error = FplError;

    fn try_from(raw: RawPlayerStats) -> Result<Self> {
        let bps = i32::try_from(raw.bps).map_err(|_| FplError::InvalidStat {
            field: "bps",
            value: raw.bps,
        })?;

        Ok(Self {
            minutes: count("minutes", raw.minutes)?,
            goals_scored: count("goals_scored", raw.goals_scored)?,
            assists: count("assists", raw.assists)?,
            clean_sheet: bounded("clean_sheets", raw.clean_sheets, 1)? == 1,
            goals_conceded: count("goals_conceded", raw.goals_conceded)?,
            own_goals: count("own_goals", raw.own_goals)?,
            penalties_saved: count("penalties_saved", raw.penalties_saved)?,
            penalties_missed: count("penalties_missed", raw.penalties_missed)?,
            yellow_cards: count("yellow_cards", raw.yellow_cards)?,
            red_cards: bounded("red_cards", raw.red_cards, 1)? as u16,
            saves: count("saves", raw.saves)?,
            bonus: bounded("bonus", raw.bonus, 3)? as u8,
            bps,
            defensive_contribution: count("defensive_contribution", raw.defensive_contribution)?,
        })
    }
}

impl PlayerStatSnapshot {
    pub fn played(&self) -> bool {
        self.minutes > 0
    }

    /// Copy of these stats with the bonus replaced.
    pub fn with_bonus(mut self, bonus: u8) -> Self {
        self.bonus = bonus;
        self
    }
}
