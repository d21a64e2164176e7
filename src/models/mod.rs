//! JSON documents read and written by the CLI.

pub mod input;
pub mod output;

pub use input::{
    AppearanceDoc, FixtureDoc, GameweekLiveDoc, LivePlayerDoc, ManagerPicksDoc, PickDoc,
};
pub use output::{BonusRow, ManagerRow, PlayerRow};
