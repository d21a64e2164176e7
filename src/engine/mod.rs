//! The scoring pipeline and its parallel batch driver.
//!
//! stats -> points -> bonus -> substitution -> captaincy -> chip -> total

pub mod batch;
pub mod pipeline;

pub use batch::score_managers;
pub use pipeline::{
    score_squad, transfer_cost_points, ManagerPicks, ManagerScore, ScoredSlot, ScoredSquad,
    ScoringContext, MAX_TRANSFER_COST,
};
