//! tests-analyzer - failures shared by two DejaGnu runs
//!
//! Reads the nSIM and HSDK `gdb.sum` files, keeps FAIL/UNTESTED/UNRESOLVED
//! outcomes reported by both, and lists the collections with common fails.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dg_tools::{compare_files, DEFAULT_HSDK_SUMMARY, DEFAULT_NSIM_SUMMARY};

#[derive(Parser)]
#[command(name = "tests-analyzer")]
#[command(version)]
#[command(about = "Intersect important test outcomes of two DejaGnu summaries", long_about = None)]
struct Cli {
    /// Summary of the nSIM run
    #[arg(default_value = DEFAULT_NSIM_SUMMARY)]
    nsim: PathBuf,
    /// Summary of the HSDK run
    #[arg(default_value = DEFAULT_HSDK_SUMMARY)]
    hsdk: PathBuf,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Enable verbose logging (stderr)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let report = compare_files(&cli.nsim, &cli.hsdk).with_context(|| {
        format!(
            "Failed to compare {} and {}",
            cli.nsim.display(),
            cli.hsdk.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
