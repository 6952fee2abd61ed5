//! Subcommand handlers for the gtfsload binary.
//!
//! Machine-consumable output (fixture documents, CSV plans) goes to stdout
//! or the requested file; progress lines and logs stay on stderr so piping
//! into the harness stays clean.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use gtfsload_core::catalog;
use gtfsload_core::plan::{self, BatchPlan, PlanMode, HEADER};

/// Prints one fixture document to stdout.
pub fn emit(name: &str, pretty: bool) -> anyhow::Result<()> {
    let fixture = catalog::require(name)
        .with_context(|| format!("expected one of: {}", catalog::names().join(", ")))?;

    if pretty {
        println!("{}", fixture.to_json_pretty()?);
    } else {
        let stdout = io::stdout();
        fixture.emit(&mut stdout.lock())?;
    }
    Ok(())
}

/// Lists the builtin fixtures, optionally with their variable maps.
pub fn list(variables: bool) -> anyhow::Result<()> {
    println!("{}", "Fixtures:".bold());
    for fixture in catalog::all() {
        // Pad before coloring; ANSI codes would skew the column width.
        let name = format!("{:<36}", fixture.name());
        println!("  {} {}", name.green(), fixture.summary());
        if variables {
            for (key, placeholder) in fixture.variables() {
                println!("      {key} = {placeholder}");
            }
        }
    }
    Ok(())
}

/// Writes every fixture document into `out_dir` as `<name>_graphql.json`.
pub fn export(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    for fixture in catalog::all() {
        let path = out_dir.join(format!("{}_graphql.json", fixture.name()));
        let mut file = fs::File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        fixture.emit(&mut file)?;
        eprintln!("{} {}", "✓".green(), path.display());
    }
    tracing::info!("Exported {} fixtures to {}", catalog::all().len(), out_dir.display());
    Ok(())
}

/// Scans `feeds_dir` and writes the batch CSV plan to `out` (`-` for stdout).
pub fn plan(
    mode: PlanMode,
    feeds_dir: &Path,
    bucket: Option<&str>,
    out: &Path,
) -> anyhow::Result<()> {
    let names = plan::scan_feeds_dir(feeds_dir)
        .with_context(|| format!("cannot scan {}", feeds_dir.display()))?;
    if names.is_empty() {
        tracing::warn!("No feed archives found in {}", feeds_dir.display());
    }

    let plan = match (mode, bucket) {
        (PlanMode::Upload, _) => BatchPlan::upload(feeds_dir, &names),
        (PlanMode::Fetch, Some(bucket)) => BatchPlan::fetch(bucket, &names),
        (PlanMode::Fetch, None) => bail!("fetch mode requires --bucket"),
    };
    tracing::info!("Built {mode} plan with {} feeds", plan.len());

    if out == Path::new("-") {
        let stdout = io::stdout();
        write_plan_csv(stdout.lock(), &plan)?;
    } else {
        let file = fs::File::create(out)
            .with_context(|| format!("cannot create {}", out.display()))?;
        write_plan_csv(file, &plan)?;
        eprintln!("{} {} ({} feeds)", "✓".green(), out.display(), plan.len());
    }
    Ok(())
}

fn write_plan_csv<W: Write>(writer: W, plan: &BatchPlan) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for entry in plan.entries() {
        csv.write_record([
            entry.project.as_str(),
            entry.mode.as_str(),
            entry.location.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
