//! Score command implementation

use anyhow::Result;
use std::{fmt::Write, path::Path};

use super::common::{load_live, load_picks, to_json};
use crate::{
    config::Config,
    engine::pipeline::{score_squad, ScoredSquad},
    models::output::PlayerRow,
};

/// Text or JSON rendering of one scored squad.
pub fn render_score(scored: &ScoredSquad, json: bool) -> Result<String> {
    if json {
        return to_json(scored);
    }

    let mut out = String::new();
    writeln!(out, "{} ({})  chip: {}", scored.name, scored.manager, scored.chip)?;
    for slot in &scored.slots {
        writeln!(out, "{}", PlayerRow::from(slot))?;
    }

    if !scored.substitutions.is_empty() {
        writeln!(out, "Substitutions:")?;
        for sub in &scored.substitutions {
            writeln!(out, "  {}", sub)?;
        }
    }
    if scored.armband_passed {
        if let Some(captain) = scored.captain.and_then(|p| scored.slot(p)) {
            writeln!(out, "Armband passed to {}", captain.name)?;
        }
    }

    let s = &scored.score;
    writeln!(
        out,
        "Gross {}  captain +{}  bench boost +{}  auto-subs +{}  hits -{}",
        s.gross_total, s.captain_bonus, s.bench_boost, s.auto_subs, s.transfer_cost
    )?;
    write!(out, "Net {}", s.net_total)?;
    Ok(out)
}

/// Handle the score command
pub fn handle_score(
    live: &Path,
    picks: &Path,
    config: &Config,
    json: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Loading live data from {}...", live.display());
    }
    let live = load_live(live)?;
    let picks = load_picks(picks, &live)?;

    if verbose {
        println!("Scoring {} ({})...", picks.name, picks.manager);
    }
    let scored = score_squad(&live, &picks, config)?;

    println!("{}", render_score(&scored, json)?);
    Ok(())
}
