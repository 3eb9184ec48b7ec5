// src/commands/sync.rs

//! Plan (and optionally apply) the sync between wants and installed packages

use std::path::Path;

use anyhow::{Context, Result};
use spacman::{
    AlpmComparator, MetadataSource, PackageManager, PacmanQuery, SnapshotFile, SyncSession,
    WantList,
};
use tracing::info;

pub struct SyncOptions<'a> {
    pub config: &'a Path,
    pub snapshot: Option<&'a Path>,
    pub pacman: &'a str,
    pub apply: bool,
    pub json: bool,
}

pub fn cmd_sync(opts: SyncOptions<'_>) -> Result<()> {
    let wants = WantList::load(opts.config)?;
    info!("{} packages declared in {}", wants.len(), opts.config.display());

    let manager = PackageManager::from_command(opts.pacman)?;

    let source: Box<dyn MetadataSource> = match opts.snapshot {
        Some(path) => Box::new(SnapshotFile::new(path)),
        None => Box::new(PacmanQuery::new()),
    };
    let session = SyncSession::load(&*source, AlpmComparator)
        .with_context(|| load_failure_message(opts.snapshot))?;

    if !opts.json {
        for diagnostic in session.diagnostics() {
            eprintln!("{}", diagnostic);
        }
    }

    let report = match session.plan(&wants) {
        Ok(report) => report,
        Err(err) => {
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&session.failure(&err))?);
            }
            return Err(err.into());
        }
    };
    info!(
        "{} of {} installed packages are required",
        report.closure_size, report.installed_count
    );

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !opts.apply {
        println!("{}", report.plan);
    }

    if opts.apply {
        for command in manager.dry_run(&report.plan) {
            info!("Running: {}", command.join(" "));
        }
        manager.apply(&report.plan)?;
    }

    Ok(())
}

fn load_failure_message(snapshot: Option<&Path>) -> String {
    match snapshot {
        Some(path) => format!("Failed to load installed packages from {}", path.display()),
        None => "Failed to query installed packages \
                 (use --snapshot to plan from saved `pacman -Qi` output)"
            .to_string(),
    }
}
