use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    config::Config,
    error::{FplError, Result},
    live::{fixture::FixtureStatus, gameweek::GameweekLive},
    scoring::{
        bonus::{provisional_bonus, ProvisionalBonus},
        points::{compute_points_with, PointsBreakdown},
    },
    squad::{apply_chip, resolve_captaincy, resolve_substitutions, Squad, Substitution, STARTERS},
    types::{
        chip::ChipState,
        ids::{FixtureId, ManagerId, PlayerId},
        position::Position,
    },
};


/// Largest transfer deduction accepted for one gameweek.
pub const MAX_TRANSFER_COST: u32 = 1_000;

/// Checked conversion of a transfer deduction into points.
pub fn transfer_cost_points(cost: u32) -> Result<i32> {
    i32::try_from(cost)
        .ok()
        .filter(|_| cost <= MAX_TRANSFER_COST)
        .ok_or(FplError::InvalidTransferCost {
            cost,
            max: MAX_TRANSFER_COST,
        })
}

/// One manager's gameweek entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerPicks {
    pub manager: ManagerId,
    pub name: String,
    pub squad: Squad,
    pub chip: ChipState,
    /// Points deducted for extra transfers, at most `MAX_TRANSFER_COST`.
    pub transfer_cost: u32,
    pub captain_multiplier_override: Option<u8>,
}

/// A squad slot after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSlot {
    pub player: PlayerId,
    pub name: String,
    pub position: Position,
    /// Ordinal after automatic substitutions.
    pub ordinal: u8,
    /// Ordinal as picked.
    pub original_ordinal: u8,
    pub breakdown: PointsBreakdown,
    /// Base points, before any multiplier.
    pub points: i32,
    /// 0 when the slot does not count.
    pub multiplier: u8,
    /// Holds the armband and counts; a captain subbed off loses it.
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub played: bool,
    pub subbed_in: bool,
    pub subbed_out: bool,
}

impl ScoredSlot {
    pub fn counted(&self) -> bool {
        self.multiplier > 0
    }

    pub fn counted_points(&self) -> i32 {
        self.points * i32::from(self.multiplier)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ManagerScore {
    pub gross_total: i32,
    /// Points added by the captain's multiplier.
    pub captain_bonus: i32,
    /// Points from bench slots that count only because of Bench Boost.
    pub bench_boost: i32,
    /// Points from players brought on by automatic substitution.
    pub auto_subs: i32,
    pub transfer_cost: i32,
    pub net_total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSquad {
    pub manager: ManagerId,
    pub name: String,
    pub chip: ChipState,
    /// Slots in post-substitution ordinal order.
    pub slots: Vec<ScoredSlot>,
    pub substitutions: Vec<Substitution>,
    /// Effective captain after armband resolution; `None` when the
    /// armband holder was subbed off.
    pub captain: Option<PlayerId>,
    pub armband_passed: bool,
    pub score: ManagerScore,
}

impl ScoredSquad {
    pub fn slot(&self, player: PlayerId) -> Option<&ScoredSlot> {
        self.slots.iter().find(|s| s.player == player)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.slot(player).is_some()
    }

    pub fn counted(&self) -> impl Iterator<Item = &ScoredSlot> {
        self.slots.iter().filter(|s| s.counted())
    }

    /// Players brought on by automatic substitution, keyed by who they replaced.
    pub fn replacements(&self) -> BTreeMap<PlayerId, PlayerId> {
        replacement_map(&self.substitutions)
    }
}

fn replacement_map(substitutions: &[Substitution]) -> BTreeMap<PlayerId, PlayerId> {
    substitutions
        .iter()
        .filter_map(|s| s.player_in.map(|p| (s.player_out, p)))
        .collect()
}

/// Gameweek-wide state shared by every manager scored against it.
#[derive(Debug)]
pub struct ScoringContext<'a> {
    live: &'a GameweekLive,
    config: &'a Config,
    bonus: ProvisionalBonus,
}

impl<'a> ScoringContext<'a> {
    pub fn new(live: &'a GameweekLive, config: &'a Config) -> Self {
        let bonus = if config.provisional_bonus {
            provisional_bonus(live)
        } else {
            ProvisionalBonus::default()
        };
        Self {
            live,
            config,
            bonus,
        }
    }

    pub fn live(&self) -> &GameweekLive {
        self.live
    }

    pub fn provisional_bonus(&self) -> &ProvisionalBonus {
        &self.bonus
    }

    /// Bonus that applies to one appearance given its fixture's status.
    fn effective_bonus(&self, player: PlayerId, fixture: FixtureId, official: u8) -> u8 {
        match self.live.fixture_status(fixture) {
            FixtureStatus::Finished => official,
            FixtureStatus::Started if self.config.provisional_bonus => self.bonus.get(fixture, player),
            FixtureStatus::Started => official,
            FixtureStatus::NotStarted => 0,
        }
    }

    /// A player's gameweek points, summed over their fixtures.
    ///
    /// Players with no live data score zero.
    pub fn player_points(&self, player: PlayerId, position: Position) -> PointsBreakdown {
        if self.live.player(player).is_none() {
            warn!("no live data for player {}, scoring as 0", player);
        }
        self.live
            .appearances(player)
            .iter()
            .map(|a| {
                let bonus = self.effective_bonus(player, a.fixture, a.stats.bonus);
                compute_points_with(&self.config.scoring, &a.stats.with_bonus(bonus), position)
            })
            .sum()
    }

    /// Run the full pipeline for one manager.
    pub fn score(&self, picks: &ManagerPicks) -> Result<ScoredSquad> {
        let squad = &picks.squad;
        let transfer_cost = transfer_cost_points(picks.transfer_cost)?;
        let played = |p: PlayerId| self.live.played(p);

        let (resolved, substitutions) = if picks.chip.is_bench_boost() {
            (squad.clone(), Vec::new())
        } else {
            resolve_substitutions(squad, played)?
        };
        let resolved = resolve_captaincy(&resolved, played);
        let adjusted = apply_chip(&resolved, picks.chip, picks.captain_multiplier_override)?;

        let breakdowns: BTreeMap<PlayerId, PointsBreakdown> = squad
            .slots()
            .iter()
            .map(|s| (s.player, self.player_points(s.player, s.position)))
            .collect();
        let replacements = replacement_map(&substitutions);

        let slots: Vec<ScoredSlot> = resolved
            .slots()
            .iter()
            .map(|slot| {
                let multiplier = adjusted.multiplier_for(slot.player);
                let breakdown = breakdowns.get(&slot.player).copied().unwrap_or_default();
                let original_ordinal = squad
                    .find(slot.player)
                    .map(|s| s.ordinal)
                    .unwrap_or(slot.ordinal);
                ScoredSlot {
                    player: slot.player,
                    name: slot.name.clone(),
                    position: slot.position,
                    ordinal: slot.ordinal,
                    original_ordinal,
                    breakdown,
                    points: breakdown.total(),
                    multiplier,
                    is_captain: slot.is_captain && multiplier > 0,
                    is_vice_captain: slot.is_vice_captain,
                    played: played(slot.player),
                    subbed_in: replacements.values().any(|p| *p == slot.player),
                    subbed_out: replacements.contains_key(&slot.player),
                }
            })
            .collect();

        let score = tally(&slots, picks.chip, transfer_cost);
        let armband = resolved.captain().map(|s| s.player);
        let armband_passed = armband != squad.captain().map(|s| s.player);
        let captain = armband.filter(|p| adjusted.is_counted(*p));

        Ok(ScoredSquad {
            manager: picks.manager,
            name: picks.name.clone(),
            chip: picks.chip,
            slots,
            substitutions,
            captain,
            armband_passed,
            score,
        })
    }
}

fn tally(slots: &[ScoredSlot], chip: ChipState, transfer_cost: i32) -> ManagerScore {
    let gross_total = slots.iter().map(ScoredSlot::counted_points).sum();
    let captain_bonus = slots
        .iter()
        .filter(|s| s.is_captain && s.counted())
        .map(|s| s.points * (i32::from(s.multiplier) - 1))
        .sum();
    let bench_boost = if chip.is_bench_boost() {
        slots
            .iter()
            .filter(|s| s.original_ordinal > STARTERS)
            .map(ScoredSlot::counted_points)
            .sum()
    } else {
        0
    };
    let auto_subs = slots
        .iter()
        .filter(|s| s.subbed_in)
        .map(ScoredSlot::counted_points)
        .sum();

    ManagerScore {
        gross_total,
        captain_bonus,
        bench_boost,
        auto_subs,
        transfer_cost,
        net_total: gross_total - transfer_cost,
    }
}

/// Score one manager against a gameweek.
pub fn score_squad(live: &GameweekLive, picks: &ManagerPicks, config: &Config) -> Result<ScoredSquad> {
    ScoringContext::new(live, config).score(picks)
}
