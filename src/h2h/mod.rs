//! Head-to-head match reconciliation.
//!
//! Splits two scored squads into the players that decide the match
//! (differentials) and the players both managers share (common).

pub mod reconcile;

pub use reconcile::{
    reconcile, side_differentials, CommonEntry, DifferentialEntry, DifferentialKind,
    MatchBreakdown, SideBreakdown,
};
