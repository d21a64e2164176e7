//! Output rows used for printing and JSON serialization.

use serde::Serialize;
use std::fmt;

use crate::{
    engine::pipeline::{ScoredSlot, ScoredSquad},
    types::{
        chip::ChipState,
        ids::{FixtureId, ManagerId, PlayerId},
        position::Position,
    },
};

/// One squad slot as shown by `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    pub ordinal: u8,
    pub player: PlayerId,
    pub name: String,
    pub position: Position,
    /// Base points before the multiplier.
    pub points: i32,
    pub multiplier: u8,
    pub counted_points: i32,
    /// Short provenance tags, e.g. `C`, `V`, `sub in`.
    pub tags: Vec<&'static str>,
}

impl From<&ScoredSlot> for PlayerRow {
    fn from(slot: &ScoredSlot) -> Self {
        let mut tags = Vec::new();
        if slot.is_captain {
            tags.push("C");
        }
        if slot.is_vice_captain {
            tags.push("V");
        }
        if slot.subbed_in {
            tags.push("sub in");
        }
        if slot.subbed_out {
            tags.push("sub out");
        }
        if !slot.played {
            tags.push("dnp");
        }
        Self {
            ordinal: slot.ordinal,
            player: slot.player,
            name: slot.name.clone(),
            position: slot.position,
            points: slot.points,
            multiplier: slot.multiplier,
            counted_points: slot.counted_points(),
            tags,
        }
    }
}

impl fmt::Display for PlayerRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}  {:<3}  {:<20} {:>3} x{} = {:>3}",
            self.ordinal,
            self.position.to_string(),
            self.name, self.points, self.multiplier, self.counted_points
        )?;
        if !self.tags.is_empty() {
            write!(f, "  [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Provisional bonus for one player in a live fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusRow {
    pub fixture: FixtureId,
    pub player: PlayerId,
    pub name: String,
    pub bps: i32,
    pub bonus: u8,
}

impl fmt::Display for BonusRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fixture {:<4} {:<20} bps {:>3}  +{}",
            self.fixture.to_string(),
            self.name,
            self.bps,
            self.bonus
        )
    }
}

/// One manager's outcome in a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerRow {
    /// The picks file the manager came from.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<ManagerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip: Option<ChipState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ManagerRow {
    pub fn scored(source: impl Into<String>, squad: &ScoredSquad) -> Self {
        Self {
            source: source.into(),
            manager: Some(squad.manager),
            name: Some(squad.name.clone()),
            chip: Some(squad.chip),
            net_total: Some(squad.score.net_total),
            error: None,
        }
    }

    pub fn failed(source: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            source: source.into(),
            manager: None,
            name: None,
            chip: None,
            net_total: None,
            error: Some(error.to_string()),
        }
    }
}

impl fmt::Display for ManagerRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.net_total, &self.error) {
            (Some(name), Some(total), _) => write!(f, "{:<24} {:>4}  ({})", name, total, self.source),
            (_, _, Some(error)) => write!(f, "{:<24} error: {}", self.source, error),
            _ => write!(f, "{}", self.source),
        }
    }
}
