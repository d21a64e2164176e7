//! Provisional bonus command implementation

use anyhow::Result;
use std::{fmt::Write, path::Path};

use super::common::{load_live, to_json};
use crate::{
    error,
    live::{FixtureStatus, GameweekLive},
    models::output::BonusRow,
    scoring::bonus::provisional_bonus,
    types::ids::FixtureId,
};

/// Bonus rows for every fixture in progress, or for one named fixture.
///
/// Naming a fixture that is not in the live data is an error; naming one
/// that is not in progress yields no rows.
pub fn bonus_rows(live: &GameweekLive, fixture: Option<FixtureId>) -> error::Result<Vec<BonusRow>> {
    if let Some(id) = fixture {
        live.require_fixture(id)?;
    }

    let bonus = provisional_bonus(live);
    let mut rows = Vec::new();
    for (id, awards) in bonus.iter() {
        if fixture.is_some_and(|f| f != *id) {
            continue;
        }
        let mut fixture_rows: Vec<BonusRow> = live
            .fixture_roster(*id)
            .into_iter()
            .filter_map(|entry| {
                let bonus = *awards.get(&entry.player)?;
                let name = live
                    .player(entry.player)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| entry.player.to_string());
                Some(BonusRow {
                    fixture: *id,
                    player: entry.player,
                    name,
                    bps: entry.bps,
                    bonus,
                })
            })
            .collect();
        fixture_rows.sort_by(|x, y| y.bonus.cmp(&x.bonus).then(x.player.cmp(&y.player)));
        rows.extend(fixture_rows);
    }
    Ok(rows)
}

pub fn render_bonus(rows: &[BonusRow], json: bool) -> Result<String> {
    if json {
        return to_json(rows);
    }
    if rows.is_empty() {
        return Ok("No provisional bonus: no fixtures in progress".to_string());
    }
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write!(out, "{}", row)?;
    }
    Ok(out)
}

/// Handle the bonus command
pub fn handle_bonus(live: &Path, fixture: Option<FixtureId>, json: bool, verbose: bool) -> Result<()> {
    let live = load_live(live)?;
    if verbose {
        let in_progress = live
            .fixtures()
            .filter(|f| f.status == FixtureStatus::Started)
            .count();
        println!("{} fixture(s) in progress", in_progress);
    }

    let rows = bonus_rows(&live, fixture)?;
    println!("{}", render_bonus(&rows, json)?);
    Ok(())
}
