//! Batch command implementation

use anyhow::Result;
use log::warn;
use std::{fmt::Write, path::Path};

use super::common::{display_name, load_live, load_picks, picks_files, to_json};
use crate::{
    config::Config,
    engine::{batch::score_managers, pipeline::ManagerPicks},
    live::GameweekLive,
    models::output::ManagerRow,
};

/// Score every picks file in `dir`, one row per file in name order.
///
/// Files that fail to load or score become error rows.
pub fn batch_rows(live: &GameweekLive, dir: &Path, config: &Config) -> Result<Vec<ManagerRow>> {
    let files = picks_files(dir)?;

    let mut sources = Vec::with_capacity(files.len());
    let mut entries: Vec<ManagerPicks> = Vec::with_capacity(files.len());
    let mut rows: Vec<Option<ManagerRow>> = Vec::with_capacity(files.len());
    for path in &files {
        let source = display_name(path);
        match load_picks(path, live) {
            Ok(picks) => {
                entries.push(picks);
                sources.push(source);
                rows.push(None);
            }
            Err(err) => {
                warn!("skipping {}: {:#}", source, err);
                rows.push(Some(ManagerRow::failed(source, format!("{:#}", err))));
            }
        }
    }

    let mut scored = score_managers(live, &entries, config)
        .into_iter()
        .zip(sources)
        .map(|(result, source)| match result {
            Ok(squad) => ManagerRow::scored(source, &squad),
            Err(err) => ManagerRow::failed(source, err),
        });

    Ok(rows
        .into_iter()
        .filter_map(|row| row.or_else(|| scored.next()))
        .collect())
}

pub fn render_batch(rows: &[ManagerRow], json: bool) -> Result<String> {
    if json {
        return to_json(rows);
    }
    let mut out = String::new();
    let mut ranked: Vec<&ManagerRow> = rows.iter().collect();
    ranked.sort_by(|x, y| y.net_total.cmp(&x.net_total));
    for (i, row) in ranked.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write!(out, "{}", row)?;
    }
    Ok(out)
}

/// Handle the batch command
pub fn handle_batch(
    live: &Path,
    picks_dir: &Path,
    threads: Option<usize>,
    config: &Config,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = config.clone();
    if threads.is_some() {
        config.threads = threads;
        config.validate()?;
    }

    let live = load_live(live)?;
    if verbose {
        println!(
            "Scoring picks in {} on {} thread(s)...",
            picks_dir.display(),
            config
                .threads
                .map_or_else(|| "default".to_string(), |t| t.to_string())
        );
    }

    let rows = batch_rows(&live, picks_dir, &config)?;
    if verbose {
        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        println!("✓ {} scored, {} failed", rows.len() - failed, failed);
    }
    println!("{}", render_batch(&rows, json)?);
    Ok(())
}
