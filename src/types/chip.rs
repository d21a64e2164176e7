//! Chips a manager may play in a gameweek.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active chip for a gameweek.
///
/// Free Hit and Wildcard change squad composition upstream; once the squad
/// is fixed for the gameweek they score exactly like `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChipState {
    #[default]
    None,
    TripleCaptain,
    BenchBoost,
    FreeHit,
    Wildcard,
}

impl ChipState {
    /// Parse the upstream `active_chip` field, where a missing chip is null.
    pub fn from_api(value: Option<&str>) -> Result<Self, FplError> {
        match value {
            None => Ok(ChipState::None),
            Some(s) => s.parse(),
        }
    }

    pub fn is_bench_boost(&self) -> bool {
        matches!(self, ChipState::BenchBoost)
    }

    /// Captain multiplier implied by this chip.
    pub fn captain_multiplier(&self) -> u8 {
        match self {
            ChipState::TripleCaptain => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for ChipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChipState::None => "none",
            ChipState::TripleCaptain => "3xc",
            ChipState::BenchBoost => "bboost",
            ChipState::FreeHit => "freehit",
            ChipState::Wildcard => "wildcard",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ChipState {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(ChipState::None),
            "3xc" | "triple_captain" | "triplecaptain" | "tc" => Ok(ChipState::TripleCaptain),
            "bboost" | "bench_boost" | "benchboost" | "bb" => Ok(ChipState::BenchBoost),
            "freehit" | "free_hit" | "fh" => Ok(ChipState::FreeHit),
            "wildcard" | "wc" => Ok(ChipState::Wildcard),
            _ => Err(FplError::InvalidChip {
                chip: s.to_string(),
            }),
        }
    }
}
