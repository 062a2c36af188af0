// src/watch.rs
//! Watch driver: re-runs the whole pipeline when relevant files change.
//! Not part of the algorithmic core; each rebuild is a full recompute.

use crate::config::{Config, PRUNE_DIRS};
use crate::error::Result;
use crate::scan;
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Builds once, then watches the scan root until the process is killed.
/// Rebuild failures are reported and watching continues.
///
/// # Errors
/// Fails only when the watcher itself cannot be set up.
pub fn run(config: &Config) -> Result<()> {
    report(scan::run(config));

    let (tx, rx) = mpsc::channel::<Event>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;
    watcher.watch(&config.root, RecursiveMode::Recursive)?;

    println!(
        "{} watching {} for changes...",
        "watch:".cyan().bold(),
        config.root.display()
    );

    loop {
        let Ok(event) = rx.recv() else {
            // Sender dropped with the watcher; nothing left to do.
            return Ok(());
        };
        if !is_relevant(&event, config) {
            continue;
        }

        // Debounce: swallow the rest of the burst before rebuilding.
        while rx.recv_timeout(DEBOUNCE).is_ok() {}

        println!("{} change detected, rebuilding...", "watch:".cyan().bold());
        report(scan::run(config));
    }
}

/// Only mutations of allowlisted files outside pruned directories trigger a
/// rebuild; access events and editor noise in ignored trees do not.
fn is_relevant(event: &Event, config: &Config) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| allowed_ext(p, config) && !in_pruned_dir(p))
}

fn allowed_ext(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| config.extensions.iter().any(|a| *a == ext))
}

fn in_pruned_dir(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|name| PRUNE_DIRS.contains(&name))
    })
}

fn report(outcome: Result<scan::ScanSummary>) {
    match outcome {
        Ok(summary) => {
            println!(
                "{} {} (nodes={}, edges={}, clusters={}, cycles={}, unresolved={})",
                "graph written:".green().bold(),
                summary.out.display(),
                summary.nodes,
                summary.edges,
                summary.clusters,
                summary.cycles,
                summary.unresolved
            );
        }
        Err(e) => eprintln!("{} rebuild failed: {e}", "watch:".red().bold()),
    }
}
