//! Engine configuration.
//!
//! Resolution order for the config file:
//! 1. an explicit path (`--config`)
//! 2. the `FPL_LIVE_CONFIG` environment variable
//! 3. `~/.config/fpl-live/config.json` (platform config dir), if it exists
//!
//! With no file, defaults apply. `FPL_LIVE_THREADS` overrides `threads`.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{FplError, Result},
    scoring::rules::ScoringRules,
    CONFIG_ENV_VAR, THREADS_ENV_VAR,
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Worker threads for batch scoring; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Rank BPS for bonus in fixtures still in progress.
    pub provisional_bonus: bool,
    pub scoring: ScoringRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            provisional_bonus: true,
            scoring: ScoringRules::default(),
        }
    }
}

/// Path: {config_dir}/fpl-live/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("fpl-live").join("config.json")
}

/// Pick the config file to read, if any.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(|| Some(default_config_path()).filter(|p| p.exists()))
}

impl Config {
    /// Read and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the resolved path (or defaults) and apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match resolve_config_path(explicit) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(THREADS_ENV_VAR) {
            let threads = raw.trim().parse::<usize>().map_err(|_| FplError::Config {
                message: format!("{} must be a positive integer, got {:?}", THREADS_ENV_VAR, raw),
            })?;
            config.threads = Some(threads);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(FplError::Config {
                message: "threads must be at least 1".to_string(),
            });
        }
        self.scoring.validate()
    }
}
