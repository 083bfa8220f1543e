//! get-random-port - print a free loopback TCP port
//!
//! Used by board files to pick the port a simulator or gdbserver listens on.

use clap::Parser;
use dg_tools::port::{PortFinder, PortRange, MAX_PORT_NUMBER, MIN_PORT_NUMBER};

#[derive(Parser)]
#[command(name = "get-random-port")]
#[command(version)]
#[command(about = "Print a random TCP port nothing on 127.0.0.1 listens on", long_about = None)]
struct Cli {
    /// Lowest candidate port
    #[arg(long, default_value_t = MIN_PORT_NUMBER)]
    min: u16,
    /// Highest candidate port
    #[arg(long, default_value_t = MAX_PORT_NUMBER)]
    max: u16,
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

    let range = PortRange::new(cli.min, cli.max)?;
    let port = PortFinder::new(range).pick();

    println!("{}", port);

    Ok(())
}
