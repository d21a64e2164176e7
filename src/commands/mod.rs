//! Command implementations for the fpl-live CLI

pub mod batch;
pub mod bonus;
pub mod common;
pub mod h2h;
pub mod score;
