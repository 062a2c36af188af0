// src/bin/repograph.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use repograph_core::cli::Cli;
use repograph_core::scan::{self, ScanSummary};
use repograph_core::watch;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    if cli.watch {
        watch::run(&config)?;
        return Ok(());
    }

    let summary = scan::run(&config)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ScanSummary) {
    println!(
        "{} {}",
        "graph written:".green().bold(),
        summary.out.display()
    );
    println!(
        "   nodes={}, edges={}, clusters={}, cycles={}, unresolved={}",
        summary.nodes, summary.edges, summary.clusters, summary.cycles, summary.unresolved
    );
}
