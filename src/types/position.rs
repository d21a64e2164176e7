//! Squad positions and the per-position counts a squad must carry.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions.
///
/// The upstream feed identifies positions by `element_type`:
/// 1 = goalkeeper, 2 = defender, 3 = midfielder, 4 = forward.
///
/// # Examples
///
/// ```rust
/// use fpl_live::Position;
///
/// let pos: Position = "mid".parse().unwrap();
/// assert_eq!(pos, Position::Midfielder);
/// assert_eq!(pos.to_string(), "MID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Convert an upstream `element_type` to a Position.
    pub fn from_element_type(id: u8) -> Result<Self, FplError> {
        match id {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    pub fn element_type(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// How many players of this position a full 15-man squad holds.
    pub fn squad_quota(&self) -> usize {
        match self {
            Position::Goalkeeper => 2,
            Position::Defender => 5,
            Position::Midfielder => 5,
            Position::Forward => 3,
        }
    }

    /// Inclusive bounds on this position inside a starting XI.
    pub fn starting_bounds(&self) -> (usize, usize) {
        match self {
            Position::Goalkeeper => (1, 1),
            Position::Defender => (3, 5),
            Position::Midfielder => (2, 5),
            Position::Forward => (1, 3),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GKP" | "GK" | "GOALKEEPER" | "1" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" | "2" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" | "3" => Ok(Position::Midfielder),
            "FWD" | "FW" | "FORWARD" | "4" => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
