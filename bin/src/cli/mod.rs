use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod extract;
mod inspectpage;
mod tabulaargs;

/// Extracts the ICPSR to FIPS county code correspondence table from the ICPSR 8611 codebook.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level. Log lines are written to stderr, apart from the extracted table on stdout.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    Extract(extract::Command),
    InspectPage(inspectpage::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::WriteLogger::init(
        args.log_level,
        simplelog::Config::default(),
        std::io::stderr(),
    )
    .with_context(|| "configuring logging")?;

    use Command::*;
    match &args.command {
        Extract(cmd) => extract::run(cmd),
        InspectPage(cmd) => inspectpage::run(cmd),
    }
}
