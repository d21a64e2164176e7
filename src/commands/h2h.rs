//! Head-to-head command implementation

use anyhow::{bail, Result};
use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

use super::common::{load_live, load_picks, to_json};
use crate::{
    config::Config,
    engine::pipeline::ScoringContext,
    h2h::{reconcile, MatchBreakdown, SideBreakdown},
};

fn write_side(out: &mut String, side: &SideBreakdown) -> std::fmt::Result {
    writeln!(
        out,
        "{} differentials ({:+}):",
        side.name, side.differential_total
    )?;
    if side.differentials.is_empty() {
        writeln!(out, "  none")?;
    }
    for entry in &side.differentials {
        let mut tags = Vec::new();
        if entry.is_captain {
            tags.push("C");
        }
        if entry.subbed_in {
            tags.push("sub in");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        writeln!(
            out,
            "  {:>+4}  {:<20} {}{}",
            entry.points, entry.name, entry.kind, tags
        )?;
    }
    Ok(())
}

/// Text or JSON rendering of a match breakdown.
pub fn render_h2h(breakdown: &MatchBreakdown, json: bool) -> Result<String> {
    if json {
        return to_json(breakdown);
    }

    let (a, b) = (&breakdown.side_a, &breakdown.side_b);
    let mut out = String::new();
    writeln!(
        out,
        "{} {} - {} {}  (margin {:+})",
        a.name, a.net_total, b.net_total, b.name, breakdown.margin
    )?;
    write_side(&mut out, a)?;
    write_side(&mut out, b)?;

    write!(out, "Common players:")?;
    if breakdown.common.is_empty() {
        write!(out, "\n  none")?;
    }
    for row in &breakdown.common {
        if row.placeholder {
            write!(out, "\n  {:<20} subbed off on both sides", row.name)?;
        } else {
            write!(
                out,
                "\n  {:<20} {:>3} | {:<3}",
                row.name, row.points_a, row.points_b
            )?;
        }
    }
    Ok(out)
}

/// Handle the h2h command
pub fn handle_h2h(
    live: &Path,
    picks: &[PathBuf],
    config: &Config,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let [a, b] = picks else {
        bail!("h2h needs exactly two picks files, got {}", picks.len());
    };

    if verbose {
        println!("Loading live data from {}...", live.display());
    }
    let live = load_live(live)?;
    let (a, b) = (load_picks(a, &live)?, load_picks(b, &live)?);

    let ctx = ScoringContext::new(&live, config);
    let (a, b) = (ctx.score(&a)?, ctx.score(&b)?);
    if verbose {
        println!("Reconciling {} vs {}...", a.name, b.name);
    }

    println!("{}", render_h2h(&reconcile(&a, &b), json)?);
    Ok(())
}
