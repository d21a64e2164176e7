//! Squads: fifteen ordered slots, validated once at the boundary.
//!
//! - `formation`: starting XI counts and legality
//! - `autosub`: automatic substitution of starters who did not play
//! - `chips`: captaincy and chip-driven participant sets

pub mod autosub;
pub mod chips;
pub mod formation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{
    error::{FplError, Result},
    types::{ids::PlayerId, position::Position},
};
use formation::Formation;

pub use autosub::{resolve_substitutions, Substitution, SubstitutionReason};
pub use chips::{apply_chip, resolve_captaincy, AdjustedParticipants, Participant};

pub const SQUAD_SIZE: usize = 15;
/// Ordinals `1..=STARTERS` form the starting XI.
pub const STARTERS: u8 = 11;
/// Bench ordinal reserved for the backup goalkeeper.
pub const BACKUP_GOALKEEPER_SLOT: u8 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadSlot {
    pub player: PlayerId,
    pub name: String,
    pub position: Position,
    /// 1-11 starters, 12-15 bench in priority order.
    pub ordinal: u8,
    /// Multiplier as picked (0 bench, 1 starter, 2/3 captain).
    pub multiplier: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl SquadSlot {
    pub fn is_starter(&self) -> bool {
        self.ordinal <= STARTERS
    }

    pub fn is_bench(&self) -> bool {
        !self.is_starter()
    }
}

/// A validated 15-player squad, stored in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Squad {
    slots: Vec<SquadSlot>,
}

impl Squad {
    /// Validate and build a squad. Fails with `InvalidSquad`.
    pub fn new(mut slots: Vec<SquadSlot>) -> Result<Self> {
        slots.sort_by_key(|s| s.ordinal);
        validate(&slots)?;
        Ok(Self { slots })
    }

    /// Rebuild from slots already derived from a valid squad.
    pub(crate) fn from_resolved(mut slots: Vec<SquadSlot>) -> Self {
        slots.sort_by_key(|s| s.ordinal);
        Self { slots }
    }

    pub fn slots(&self) -> &[SquadSlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<SquadSlot> {
        self.slots
    }

    pub fn starters(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| s.is_starter())
    }

    pub fn bench(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| s.is_bench())
    }

    pub fn slot(&self, ordinal: u8) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.ordinal == ordinal)
    }

    pub fn find(&self, player: PlayerId) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.player == player)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.find(player).is_some()
    }

    pub fn captain(&self) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.is_captain)
    }

    pub fn vice_captain(&self) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.is_vice_captain)
    }

    pub fn formation(&self) -> Formation {
        Formation::of(self.starters().map(|s| s.position))
    }
}

fn validate(slots: &[SquadSlot]) -> Result<()> {
    if slots.len() != SQUAD_SIZE {
        return Err(FplError::invalid_squad(format!(
            "expected {} slots, found {}",
            SQUAD_SIZE,
            slots.len()
        )));
    }

    let ordinals: Vec<u8> = slots.iter().map(|s| s.ordinal).collect();
    if ordinals != (1..=SQUAD_SIZE as u8).collect::<Vec<_>>() {
        return Err(FplError::invalid_squad(format!(
            "ordinals must be exactly 1-15, found {:?}",
            ordinals
        )));
    }

    let mut seen = BTreeSet::new();
    if let Some(dup) = slots.iter().find(|s| !seen.insert(s.player)) {
        return Err(FplError::invalid_squad(format!(
            "player {} appears more than once",
            dup.player
        )));
    }

    if let Some(slot) = slots.iter().find(|s| s.multiplier > 3) {
        return Err(FplError::invalid_squad(format!(
            "player {} has multiplier {}",
            slot.player, slot.multiplier
        )));
    }

    let squad = Formation::of(slots.iter().map(|s| s.position));
    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|p| squad.count(*p) != p.squad_quota())
    {
        return Err(FplError::invalid_squad(format!(
            "expected {} {} players, found {}",
            pos.squad_quota(),
            pos,
            squad.count(pos)
        )));
    }

    let backup = &slots[usize::from(BACKUP_GOALKEEPER_SLOT) - 1];
    if !backup.position.is_goalkeeper() {
        return Err(FplError::invalid_squad(format!(
            "slot {} must hold the backup goalkeeper, found {}",
            BACKUP_GOALKEEPER_SLOT, backup.position
        )));
    }

    let xi = Formation::of(slots.iter().filter(|s| s.is_starter()).map(|s| s.position));
    if !xi.is_legal() {
        return Err(FplError::invalid_squad(format!(
            "starting formation {} is not legal",
            xi
        )));
    }

    let captains: Vec<&SquadSlot> = slots.iter().filter(|s| s.is_captain).collect();
    let vices: Vec<&SquadSlot> = slots.iter().filter(|s| s.is_vice_captain).collect();
    match (captains.as_slice(), vices.as_slice()) {
        ([captain], _) if captain.is_bench() => Err(FplError::invalid_squad(format!(
            "captain {} is on the bench",
            captain.player
        ))),
        ([captain], [vice]) if captain.player == vice.player => Err(FplError::invalid_squad(
            "captain and vice-captain must be different players",
        )),
        ([_], [vice]) if vice.is_bench() => Err(FplError::invalid_squad(format!(
            "vice-captain {} is on the bench",
            vice.player
        ))),
        ([_], [] | [_]) => Ok(()),
        ([_], _) => Err(FplError::invalid_squad("more than one vice-captain")),
        (caps, _) => Err(FplError::invalid_squad(format!(
            "expected exactly one captain, found {}",
            caps.len()
        ))),
    }?;

    match slots.iter().find(|s| !multiplier_matches_slot(s)) {
        Some(slot) => Err(FplError::invalid_squad(format!(
            "player {} in slot {} has multiplier {}",
            slot.player, slot.ordinal, slot.multiplier
        ))),
        None => Ok(()),
    }
}

/// Captain 2 or 3, other starters 1, bench 0 (1 under Bench Boost).
fn multiplier_matches_slot(slot: &SquadSlot) -> bool {
    match (slot.is_captain, slot.is_starter()) {
        (true, _) => matches!(slot.multiplier, 2 | 3),
        (false, true) => slot.multiplier == 1,
        (false, false) => slot.multiplier <= 1,
    }
}

/// Incremental squad construction.
///
/// Players are added in ordinal order. Multipliers follow the upstream
/// convention: 1 for starters, 0 for the bench, 2 for the captain.
#[derive(Debug, Default)]
pub struct SquadBuilder {
    slots: Vec<SquadSlot>,
}

impl SquadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, id: PlayerId, name: impl Into<String>, position: Position) -> Self {
        let ordinal = self.slots.len() as u8 + 1;
        self.slots.push(SquadSlot {
            player: id,
            name: name.into(),
            position,
            ordinal,
            multiplier: u8::from(ordinal <= STARTERS),
            is_captain: false,
            is_vice_captain: false,
        });
        self
    }

    pub fn captain(mut self, id: PlayerId) -> Self {
        for slot in self.slots.iter_mut() {
            slot.is_captain = slot.player == id;
            if slot.is_captain {
                slot.multiplier = 2;
            } else if slot.multiplier == 2 {
                slot.multiplier = 1;
            }
        }
        self
    }

    pub fn vice_captain(mut self, id: PlayerId) -> Self {
        for slot in self.slots.iter_mut() {
            slot.is_vice_captain = slot.player == id;
        }
        self
    }

    pub fn build(self) -> Result<Squad> {
        Squad::new(self.slots)
    }
}
