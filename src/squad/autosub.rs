//! Automatic substitutions.
//!
//! Starters who did not play are replaced from the bench in bench order.
//! A goalkeeper can only be replaced by the backup goalkeeper in slot 12; an
//! outfield player by the first bench outfielder whose arrival keeps the XI
//! legal. Each swap is checked against the squad as already modified by the
//! swaps before it.

use log::debug;
use serde::Serialize;
use std::fmt;

use super::{formation::Formation, Squad, SquadSlot, BACKUP_GOALKEEPER_SLOT};
use crate::{
    error::{FplError, Result},
    types::ids::PlayerId,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubstitutionReason {
    /// Starter did not play and was replaced.
    DidNotPlay,
    /// No bench player who played keeps the formation legal.
    NoEligibleSubstitute,
    /// Starting goalkeeper did not play and neither did the backup.
    BackupGoalkeeperDidNotPlay,
}

impl fmt::Display for SubstitutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubstitutionReason::DidNotPlay => "did not play",
            SubstitutionReason::NoEligibleSubstitute => {
                "did not play, no eligible substitute keeps a legal formation"
            }
            SubstitutionReason::BackupGoalkeeperDidNotPlay => {
                "did not play, backup goalkeeper did not play either"
            }
        };
        write!(f, "{}", s)
    }
}

/// One entry of the substitution log.
///
/// `player_in` is `None` when the starter could not be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub player_out: PlayerId,
    pub player_in: Option<PlayerId>,
    pub reason: SubstitutionReason,
}

impl Substitution {
    pub fn is_applied(&self) -> bool {
        self.player_in.is_some()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.player_in {
            Some(player_in) => write!(f, "{} -> {} ({})", self.player_out, player_in, self.reason),
            None => write!(f, "{} stays ({})", self.player_out, self.reason),
        }
    }
}

fn index(ordinal: u8) -> usize {
    usize::from(ordinal) - 1
}

/// Exchange a starter with a bench player; the incoming player takes the
/// starter's ordinal and vice versa.
fn swap(slots: &mut [SquadSlot], starter: u8, bench: u8) {
    slots.swap(index(starter), index(bench));
    let incoming = &mut slots[index(starter)];
    incoming.ordinal = starter;
    incoming.multiplier = incoming.multiplier.max(1);
    let outgoing = &mut slots[index(bench)];
    outgoing.ordinal = bench;
    outgoing.multiplier = 0;
}

fn formation(slots: &[SquadSlot]) -> Formation {
    Formation::of(slots.iter().filter(|s| s.is_starter()).map(|s| s.position))
}

/// Replace starters who did not play.
///
/// `played` reports whether a player recorded any minutes. Returns the
/// adjusted squad and the substitution log in starter order. Fails with
/// `AmbiguousFormation` if the resulting XI is not legal.
pub fn resolve_substitutions(
    squad: &Squad,
    played: impl Fn(PlayerId) -> bool,
) -> Result<(Squad, Vec<Substitution>)> {
    let mut slots = squad.slots().to_vec();

    let non_playing: Vec<u8> = squad
        .starters()
        .filter(|s| !played(s.player))
        .map(|s| s.ordinal)
        .collect();
    let mut pool: Vec<u8> = squad
        .bench()
        .filter(|s| played(s.player))
        .map(|s| s.ordinal)
        .collect();

    let mut log = Vec::with_capacity(non_playing.len());
    for starter in non_playing {
        let out = slots[index(starter)].clone();

        let pick = if out.position.is_goalkeeper() {
            pool.iter().position(|&b| b == BACKUP_GOALKEEPER_SLOT)
        } else {
            let current = formation(&slots);
            pool.iter().position(|&b| {
                let candidate = &slots[index(b)];
                !candidate.position.is_goalkeeper()
                    && current.swapped(out.position, candidate.position).is_legal()
            })
        };

        let entry = match pick {
            Some(i) => {
                let bench = pool.remove(i);
                let player_in = slots[index(bench)].player;
                swap(&mut slots, starter, bench);
                debug!("auto-sub: {} ({}) replaced by {}", out.name, out.player, player_in);
                Substitution {
                    player_out: out.player,
                    player_in: Some(player_in),
                    reason: SubstitutionReason::DidNotPlay,
                }
            }
            None => {
                let reason = if out.position.is_goalkeeper() {
                    SubstitutionReason::BackupGoalkeeperDidNotPlay
                } else {
                    SubstitutionReason::NoEligibleSubstitute
                };
                debug!("auto-sub: {} ({}) kept, {}", out.name, out.player, reason);
                Substitution {
                    player_out: out.player,
                    player_in: None,
                    reason,
                }
            }
        };
        log.push(entry);
    }

    let xi = formation(&slots);
    if !xi.is_legal() {
        return Err(FplError::AmbiguousFormation {
            formation: xi.to_string(),
        });
    }

    Ok((Squad::from_resolved(slots), log))
}
