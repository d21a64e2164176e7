//! Type-safe wrappers and enums for FPL squad and live data.

pub mod chip;
pub mod ids;
pub mod position;
