//! Score many managers against one gameweek in parallel.

use log::{debug, warn};
use rayon::prelude::*;

use super::pipeline::{ManagerPicks, ScoredSquad, ScoringContext};
use crate::{config::Config, error::Result, live::gameweek::GameweekLive};

fn with_pool<T: Send>(threads: Option<usize>, action: impl FnOnce() -> T + Send) -> T {
    let Some(threads) = threads else {
        return action();
    };
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(err) => {
            warn!("could not build a {}-thread pool ({}), using the global pool", threads, err);
            action()
        }
    }
}

/// Score every entry; results come back in input order.
///
/// Provisional bonus is ranked once and shared by all entries. One entry
/// failing (e.g. an invalid squad) does not affect the others.
pub fn score_managers(
    live: &GameweekLive,
    entries: &[ManagerPicks],
    config: &Config,
) -> Vec<Result<ScoredSquad>> {
    let ctx = ScoringContext::new(live, config);
    debug!("scoring {} managers", entries.len());
    with_pool(config.threads, || {
        entries.par_iter().map(|picks| ctx.score(picks)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::pipeline::tests_support::{live_all_played, picks_for},
        types::ids::ManagerId,
    };

    #[test]
    fn test_results_preserve_input_order() {
        let live = live_all_played();
        let entries: Vec<ManagerPicks> = (1..=20).map(|m| picks_for(ManagerId::new(m))).collect();

        let config = Config {
            threads: Some(3),
            ..Config::default()
        };
        let results = score_managers(&live, &entries, &config);

        assert_eq!(results.len(), 20);
        for (i, result) in results.iter().enumerate() {
            let scored = result.as_ref().unwrap();
            assert_eq!(scored.manager, ManagerId::new(i as u64 + 1));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let live = live_all_played();
        let entries: Vec<ManagerPicks> = (1..=8).map(|m| picks_for(ManagerId::new(m))).collect();
        let config = Config::default();

        let parallel = score_managers(&live, &entries, &config);
        let ctx = ScoringContext::new(&live, &config);
        for (picks, result) in entries.iter().zip(parallel) {
            assert_eq!(result.unwrap(), ctx.score(picks).unwrap());
        }
    }

    #[test]
    fn test_empty_batch() {
        let live = live_all_played();
        assert!(score_managers(&live, &[], &Config::default()).is_empty());
    }
}
