//! Error types for the FPL live-scoring engine

use thiserror::Error;

use crate::types::ids::{FixtureId, PlayerId};

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid stat {field}: {value}")]
    InvalidStat { field: &'static str, value: i64 },

    #[error("Invalid squad: {reason}")]
    InvalidSquad { reason: String },

    #[error("Starting XI has no legal formation after substitutions: {formation}")]
    AmbiguousFormation { formation: String },

    #[error("No live data for player {player}")]
    MissingPlayer { player: PlayerId },

    #[error("No live data for fixture {fixture}")]
    MissingFixture { fixture: FixtureId },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid chip: {chip}")]
    InvalidChip { chip: String },

    #[error("Invalid captain multiplier: {multiplier}")]
    InvalidMultiplier { multiplier: u8 },

    #[error("Transfer cost {cost} exceeds the maximum of {max}")]
    InvalidTransferCost { cost: u32, max: u32 },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl FplError {
    pub(crate) fn invalid_squad(reason: impl Into<String>) -> Self {
        FplError::InvalidSquad {
            reason: reason.into(),
        }
    }

    /// True for the "data not yet available" class of failures.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            FplError::MissingPlayer { .. } | FplError::MissingFixture { .. }
        )
    }
}
