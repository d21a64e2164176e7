//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use fpl_live::{
    cli::{Commands, FplLive},
    commands::{
        batch::handle_batch, bonus::handle_bonus, common::load_config, h2h::handle_h2h,
        score::handle_score,
    },
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FplLive::parse();

    let log_level = if app.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = load_config(app.config.as_deref(), app.verbose)?;

    match app.command {
        Commands::Score { live, picks, json } => {
            handle_score(&live.live, &picks, &config, json, app.verbose)?
        }
        Commands::H2h { live, picks, json } => {
            handle_h2h(&live.live, &picks, &config, json, app.verbose)?
        }
        Commands::Bonus {
            live,
            fixture,
            json,
        } => handle_bonus(&live.live, fixture, json, app.verbose)?,
        Commands::Batch {
            live,
            picks_dir,
            threads,
            json,
        } => handle_batch(&live.live, &picks_dir, threads, &config, json, app.verbose)?,
    }

    Ok(())
}
