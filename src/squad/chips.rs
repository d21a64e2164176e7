//! Captaincy and chip-driven participant sets.

use log::debug;
use serde::Serialize;

use super::Squad;
use crate::{
    error::{FplError, Result},
    types::{chip::ChipState, ids::PlayerId},
};


/// A slot that counts toward the total, with its effective multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub player: PlayerId,
    pub ordinal: u8,
    pub multiplier: u8,
}

/// The slots that count for a gameweek after the chip is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedParticipants {
    pub chip: ChipState,
    pub captain_multiplier: u8,
    participants: Vec<Participant>,
}

impl AdjustedParticipants {
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Effective multiplier; 0 for players who do not count.
    pub fn multiplier_for(&self, player: PlayerId) -> u8 {
        self.participants
            .iter()
            .find(|p| p.player == player)
            .map(|p| p.multiplier)
            .unwrap_or(0)
    }

    pub fn is_counted(&self, player: PlayerId) -> bool {
        self.multiplier_for(player) > 0
    }

    /// Σ points × multiplier over the participants.
    pub fn total(&self, points: impl Fn(PlayerId) -> i32) -> i32 {
        self.participants
            .iter()
            .map(|p| points(p.player) * i32::from(p.multiplier))
            .sum()
    }
}

/// Pass the armband to the vice-captain when the captain did not play and
/// the vice-captain did. Otherwise the squad is returned unchanged.
pub fn resolve_captaincy(squad: &Squad, played: impl Fn(PlayerId) -> bool) -> Squad {
    let (Some(captain), Some(vice)) = (squad.captain(), squad.vice_captain()) else {
        return squad.clone();
    };
    if played(captain.player) || !played(vice.player) {
        return squad.clone();
    }

    debug!(
        "captain {} did not play, armband passes to {}",
        captain.name, vice.name
    );
    let (from, to) = (captain.player, vice.player);
    let slots = squad
        .slots()
        .iter()
        .cloned()
        .map(|mut slot| {
            if slot.player == from {
                slot.is_captain = false;
            } else if slot.player == to {
                slot.is_captain = true;
                slot.is_vice_captain = false;
            }
            slot
        })
        .collect();
    Squad::from_resolved(slots)
}

/// Apply the gameweek's chip to a (resolved) squad.
///
/// Starters count unless the chip is Bench Boost, in which case all fifteen
/// do. The captain's multiplier is 2, or 3 under Triple Captain;
/// `captain_multiplier_override` (2 or 3) replaces it when given.
pub fn apply_chip(
    squad: &Squad,
    chip: ChipState,
    captain_multiplier_override: Option<u8>,
) -> Result<AdjustedParticipants> {
    let captain_multiplier = match captain_multiplier_override {
        Some(m @ 2..=3) => m,
        Some(m) => return Err(FplError::InvalidMultiplier { multiplier: m }),
        None => chip.captain_multiplier(),
    };

    let participants = squad
        .slots()
        .iter()
        .filter(|s| chip.is_bench_boost() || s.is_starter())
        .map(|s| Participant {
            player: s.player,
            ordinal: s.ordinal,
            multiplier: if s.is_captain { captain_multiplier } else { 1 },
        })
        .collect();

    Ok(AdjustedParticipants {
        chip,
        captain_multiplier,
        participants,
    })
}
