//! Scoring rules table.
//!
//! `ScoringRules::default()` is the official table. Rules deserialize from
//! the `scoring` section of the config file so an older season's table can be
//! reproduced; every omitted rule falls back to the official value. A
//! per-position rule is replaced as a whole.

use serde::{Deserialize, Serialize};

use crate::{
    error::{FplError, Result},
    types::position::Position,
};

/// One value per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPosition<T> {
    pub goalkeeper: T,
    pub defender: T,
    pub midfielder: T,
    pub forward: T,
}

impl<T: Copy> PerPosition<T> {
    pub const fn new(goalkeeper: T, defender: T, midfielder: T, forward: T) -> Self {
        Self {
            goalkeeper,
            defender,
            midfielder,
            forward,
        }
    }

    pub fn get(&self, position: Position) -> T {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Minutes needed for the full appearance award and a clean sheet.
    pub long_appearance_minutes: u16,
    pub short_appearance: i32,
    pub long_appearance: i32,
    pub goal: PerPosition<i32>,
    pub assist: i32,
    pub clean_sheet: PerPosition<i32>,
    /// Points per `goals_conceded_step` goals conceded.
    pub goals_conceded: PerPosition<i32>,
    pub goals_conceded_step: u16,
    /// Goalkeeper points per `saves_step` saves.
    pub saves: i32,
    pub saves_step: u16,
    pub penalty_saved: i32,
    pub penalty_missed: i32,
    pub yellow_card: i32,
    pub red_card: i32,
    pub own_goal: i32,
    /// Actions needed for the defensive contribution award; `None` = never.
    pub defensive_contribution_threshold: PerPosition<Option<u16>>,
    pub defensive_contribution: i32,
}

impl ScoringRules {
    pub const OFFICIAL: ScoringRules = ScoringRules {
        long_appearance_minutes: 60,
        short_appearance: 1,
        long_appearance: 2,
        goal: PerPosition::new(10, 6, 5, 4),
        assist: 3,
        clean_sheet: PerPosition::new(4, 4, 1, 0),
        goals_conceded: PerPosition::new(-1, -1, 0, 0),
        goals_conceded_step: 2,
        saves: 1,
        saves_step: 3,
        penalty_saved: 5,
        penalty_missed: -2,
        yellow_card: -1,
        red_card: -3,
        own_goal: -2,
        defensive_contribution_threshold: PerPosition::new(None, Some(10), Some(12), Some(12)),
        defensive_contribution: 2,
    };

    /// Reject tables the calculator cannot apply.
    pub fn validate(&self) -> Result<()> {
        if self.goals_conceded_step == 0 {
            return Err(FplError::Config {
                message: "scoring.goals_conceded_step must be at least 1".to_string(),
            });
        }
        if self.saves_step == 0 {
            return Err(FplError::Config {
                message: "scoring.saves_step must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::OFFICIAL
    }
}
