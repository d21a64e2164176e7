//! Loading helpers shared across commands.
//!
//! File-level failures carry the path as context; validation failures keep
//! the underlying `FplError` as their source.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{resolve_config_path, Config},
    engine::pipeline::ManagerPicks,
    live::GameweekLive,
    models::input::{GameweekLiveDoc, ManagerPicksDoc},
};

/// Load the config, reporting where it came from when verbose.
pub fn load_config(explicit: Option<&Path>, verbose: bool) -> Result<Config> {
    let source = resolve_config_path(explicit);
    if verbose {
        match &source {
            Some(path) => println!("Using config: {}", path.display()),
            None => println!("Using default config"),
        }
    }
    Config::load(explicit).context("Failed to load configuration")
}

pub fn load_live(path: &Path) -> Result<GameweekLive> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read live data {}", path.display()))?;
    let doc = GameweekLiveDoc::from_json(&text)
        .with_context(|| format!("Failed to parse live data {}", path.display()))?;
    GameweekLive::try_from(doc)
        .with_context(|| format!("Invalid live data in {}", path.display()))
}

pub fn load_picks(path: &Path, live: &GameweekLive) -> Result<ManagerPicks> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read picks {}", path.display()))?;
    let doc = ManagerPicksDoc::from_json(&text)
        .with_context(|| format!("Failed to parse picks {}", path.display()))?;
    doc.into_picks(live)
        .with_context(|| format!("Invalid picks in {}", path.display()))
}

/// Every `*.json` file directly under `dir`, sorted by name.
pub fn picks_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list picks directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// File name for display; falls back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
