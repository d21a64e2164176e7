//! Per-player scoring: the official points table and provisional bonus.

pub mod bonus;
pub mod points;
pub mod rules;

pub use bonus::{compute_bonus, provisional_bonus, PlayerLiveEntry, ProvisionalBonus};
pub use points::{compute_points, compute_points_with, PointsBreakdown};
pub use rules::{PerPosition, ScoringRules};
