use serde::Serialize;
use std::fmt;

use crate::{
    engine::pipeline::{ScoredSlot, ScoredSquad},
    squad::SQUAD_SIZE,
    types::ids::{ManagerId, PlayerId},
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentialKind {
    /// Counted here, not owned by the opponent.
    Pure,
    /// Counted here, sitting unused on the opponent's bench.
    Position,
    /// Counted by both, with a bigger multiplier on this side.
    Captain,
    /// This side paid more for transfers.
    TransferHit,
}

impl fmt::Display for DifferentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DifferentialKind::Pure => "pure",
            DifferentialKind::Position => "position",
            DifferentialKind::Captain => "captain",
            DifferentialKind::TransferHit => "transfer hit",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferentialEntry {
    /// None for the transfer hit.
    pub player: Option<PlayerId>,
    pub name: String,
    pub kind: DifferentialKind,
    /// Contribution to this side's differential total.
    pub points: i32,
    pub raw_points: i32,
    pub multiplier: u8,
    pub is_captain: bool,
    pub subbed_in: bool,
    #[serde(skip)]
    order: u8,
}

impl DifferentialEntry {
    fn for_slot(slot: &ScoredSlot, kind: DifferentialKind, points: i32) -> Self {
        Self {
            player: Some(slot.player),
            name: slot.name.clone(),
            kind,
            points,
            raw_points: slot.points,
            multiplier: slot.multiplier,
            is_captain: slot.is_captain,
            subbed_in: slot.subbed_in,
            order: slot.original_ordinal,
        }
    }

    fn transfer_hit(gap: i32) -> Self {
        Self {
            player: None,
            name: "Transfer hit".to_string(),
            kind: DifferentialKind::TransferHit,
            points: -gap,
            raw_points: -gap,
            multiplier: 1,
            is_captain: false,
            subbed_in: false,
            order: SQUAD_SIZE as u8 + 1,
        }
    }
}

/// A player counted by both sides, or a placeholder for a player both sides
/// lost to different substitutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonEntry {
    pub player: PlayerId,
    pub name: String,
    pub raw_points: i32,
    pub points_a: i32,
    pub points_b: i32,
    pub captain_a: bool,
    pub captain_b: bool,
    pub subbed_in_a: bool,
    pub subbed_in_b: bool,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideBreakdown {
    pub manager: ManagerId,
    pub name: String,
    pub net_total: i32,
    pub differentials: Vec<DifferentialEntry>,
    pub differential_total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    pub side_a: SideBreakdown,
    pub side_b: SideBreakdown,
    pub common: Vec<CommonEntry>,
    /// net_a - net_b, always equal to the difference of differential totals.
    pub margin: i32,
}

impl MatchBreakdown {
    /// The manager ahead, or None when level.
    pub fn leader(&self) -> Option<ManagerId> {
        match self.margin {
            m if m > 0 => Some(self.side_a.manager),
            m if m < 0 => Some(self.side_b.manager),
            _ => None,
        }
    }
}

/// Differentials for `this` side against `other`, highest contribution
/// first. Ties keep squad order and the transfer hit goes last.
pub fn side_differentials(this: &ScoredSquad, other: &ScoredSquad) -> Vec<DifferentialEntry> {
    let mut entries: Vec<DifferentialEntry> = this
        .counted()
        .filter_map(|slot| {
            let (kind, points) = match other.slot(slot.player) {
                None => (DifferentialKind::Pure, slot.counted_points()),
                Some(theirs) if !theirs.counted() => {
                    (DifferentialKind::Position, slot.counted_points())
                }
                Some(theirs) if slot.multiplier > theirs.multiplier => (
                    DifferentialKind::Captain,
                    slot.points * i32::from(slot.multiplier - theirs.multiplier),
                ),
                Some(_) => return None,
            };
            Some(DifferentialEntry::for_slot(slot, kind, points))
        })
        .collect();

    let gap = this.score.transfer_cost - other.score.transfer_cost;
    if gap > 0 {
        entries.push(DifferentialEntry::transfer_hit(gap));
    }

    entries.sort_by(|x, y| y.points.cmp(&x.points).then(x.order.cmp(&y.order)));
    entries
}

fn side_breakdown(this: &ScoredSquad, other: &ScoredSquad) -> SideBreakdown {
    let differentials = side_differentials(this, other);
    SideBreakdown {
        manager: this.manager,
        name: this.name.clone(),
        net_total: this.score.net_total,
        differential_total: differentials.iter().map(|d| d.points).sum(),
        differentials,
    }
}

fn common_players(a: &ScoredSquad, b: &ScoredSquad) -> Vec<CommonEntry> {
    let mut rows: Vec<(u8, CommonEntry)> = a
        .counted()
        .filter_map(|ours| {
            let theirs = b.slot(ours.player).filter(|s| s.counted())?;
            let row = CommonEntry {
                player: ours.player,
                name: ours.name.clone(),
                raw_points: ours.points,
                points_a: ours.counted_points(),
                points_b: theirs.counted_points(),
                captain_a: ours.is_captain,
                captain_b: theirs.is_captain,
                subbed_in_a: ours.subbed_in,
                subbed_in_b: theirs.subbed_in,
                placeholder: false,
            };
            Some((ours.original_ordinal, row))
        })
        .collect();

    // Same substitute on both sides already shows up as a counted common row.
    let theirs = b.replacements();
    for (out, sub_a) in a.replacements() {
        let Some(sub_b) = theirs.get(&out) else {
            continue;
        };
        if *sub_b == sub_a {
            continue;
        }
        if let Some(slot) = a.slot(out) {
            let row = CommonEntry {
                player: out,
                name: slot.name.clone(),
                raw_points: 0,
                points_a: 0,
                points_b: 0,
                captain_a: false,
                captain_b: false,
                subbed_in_a: false,
                subbed_in_b: false,
                placeholder: true,
            };
            rows.push((slot.original_ordinal, row));
        }
    }

    rows.sort_by_key(|(order, _)| *order);
    rows.into_iter().map(|(_, row)| row).collect()
}

/// Break a head-to-head match down into differentials and common players.
pub fn reconcile(a: &ScoredSquad, b: &ScoredSquad) -> MatchBreakdown {
    MatchBreakdown {
        side_a: side_breakdown(a, b),
        side_b: side_breakdown(b, a),
        common: common_players(a, b),
        margin: a.score.net_total - b.score.net_total,
    }
}
