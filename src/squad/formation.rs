//! Starting XI formation counts and legality.

use serde::Serialize;
use std::fmt;

use crate::types::position::Position;

/// Position counts of a starting XI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Formation {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl Formation {
    pub fn of(positions: impl IntoIterator<Item = Position>) -> Self {
        positions.into_iter().fold(Self::default(), |mut f, p| {
            *f.count_mut(p) += 1;
            f
        })
    }

    pub fn count(&self, position: Position) -> usize {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    fn count_mut(&mut self, position: Position) -> &mut usize {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Forward => &mut self.forwards,
        }
    }

    /// Counts after one player of `out` is replaced by one of `incoming`.
    pub fn swapped(&self, out: Position, incoming: Position) -> Self {
        let mut next = *self;
        *next.count_mut(out) = next.count(out).saturating_sub(1);
        *next.count_mut(incoming) += 1;
        next
    }

    pub fn size(&self) -> usize {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }

    /// 11 players: 1 GK, 3-5 DEF, 2-5 MID, 1-3 FWD.
    pub fn is_legal(&self) -> bool {
        self.size() == 11
            && Position::ALL.iter().all(|&p| {
                let (min, max) = p.starting_bounds();
                (min..=max).contains(&self.count(p))
            })
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.goalkeepers, self.defenders, self.midfielders, self.forwards
        )
    }
}
