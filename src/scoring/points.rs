use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::rules::ScoringRules;
use crate::{live::stats::PlayerStatSnapshot, types::position::Position};


/// Points a player earned, by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub minutes: i32,
    pub goals: i32,
    pub assists: i32,
    pub clean_sheet: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub cards: i32,
    pub own_goals: i32,
    pub bonus: i32,
    pub defensive_contribution: i32,
}

impl PointsBreakdown {
    pub fn total(&self) -> i32 {
        self.fields().iter().map(|(_, pts)| pts).sum()
    }

    /// Named fields in display order.
    pub fn fields(&self) -> [(&'static str, i32); 12] {
        [
            ("minutes", self.minutes),
            ("goals", self.goals),
            ("assists", self.assists),
            ("clean_sheet", self.clean_sheet),
            ("goals_conceded", self.goals_conceded),
            ("saves", self.saves),
            ("penalties_saved", self.penalties_saved),
            ("penalties_missed", self.penalties_missed),
            ("cards", self.cards),
            ("own_goals", self.own_goals),
            ("bonus", self.bonus),
            ("defensive_contribution", self.defensive_contribution),
        ]
    }
}

impl Add for PointsBreakdown {
    type Output = PointsBreakdown;

    fn add(self, rhs: Self) -> Self::Output {
        PointsBreakdown {
            minutes: self.minutes + rhs.minutes,
            goals: self.goals + rhs.goals,
            assists: self.assists + rhs.assists,
            clean_sheet: self.clean_sheet + rhs.clean_sheet,
            goals_conceded: self.goals_conceded + rhs.goals_conceded,
            saves: self.saves + rhs.saves,
            penalties_saved: self.penalties_saved + rhs.penalties_saved,
            penalties_missed: self.penalties_missed + rhs.penalties_missed,
            cards: self.cards + rhs.cards,
            own_goals: self.own_goals + rhs.own_goals,
            bonus: self.bonus + rhs.bonus,
            defensive_contribution: self.defensive_contribution + rhs.defensive_contribution,
        }
    }
}

impl AddAssign for PointsBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for PointsBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(PointsBreakdown::default(), Add::add)
    }
}

/// Compute one fixture's points with the official table.
pub fn compute_points(stats: &PlayerStatSnapshot, position: Position) -> PointsBreakdown {
    compute_points_with(&ScoringRules::OFFICIAL, stats, position)
}

/// Compute one fixture's points for a player in the given position.
pub fn compute_points_with(
    rules: &ScoringRules,
    stats: &PlayerStatSnapshot,
    position: Position,
) -> PointsBreakdown {
    let count = |n: u16| i32::from(n);
    let per_step = |n: u16, step: u16| count(n.checked_div(step).unwrap_or(0));

    let minutes = match stats.minutes {
        0 => 0,
        m if m < rules.long_appearance_minutes => rules.short_appearance,
        _ => rules.long_appearance,
    };

    let clean_sheet = if stats.clean_sheet && stats.minutes >= rules.long_appearance_minutes {
        rules.clean_sheet.get(position)
    } else {
        0
    };

    // No minutes gate: a keeper subbed on at 80' still concedes.
    let goals_conceded = rules.goals_conceded.get(position)
        * per_step(stats.goals_conceded, rules.goals_conceded_step);

    let saves = if position.is_goalkeeper() {
        rules.saves * per_step(stats.saves, rules.saves_step)
    } else {
        0
    };

    let defensive_contribution = match rules.defensive_contribution_threshold.get(position) {
        Some(threshold) if stats.defensive_contribution >= threshold => {
            rules.defensive_contribution
        }
        _ => 0,
    };

    PointsBreakdown {
        minutes,
        goals: rules.goal.get(position) * count(stats.goals_scored),
        assists: rules.assist * count(stats.assists),
        clean_sheet,
        goals_conceded,
        saves,
        penalties_saved: rules.penalty_saved * count(stats.penalties_saved),
        penalties_missed: rules.penalty_missed * count(stats.penalties_missed),
        cards: rules.yellow_card * count(stats.yellow_cards)
            + rules.red_card * count(stats.red_cards),
        own_goals: rules.own_goal * count(stats.own_goals),
        bonus: i32::from(stats.bonus),
        defensive_contribution,
    }
}
