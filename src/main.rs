use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sinepeak::manager::Manager;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    run_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new noisy signal.
    Create,

    /// Estimate the periods of every signal.
    Analyze,

    /// Remove all signal and results files.
    Clean,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(args.run_dir).context("failed to construct mgr")?;

    match args.command {
        Command::Create => mgr.create_signal()?,
        Command::Analyze => mgr.analyze_signals()?,
        Command::Clean => mgr.clean_run()?,
    }

    Ok(())
}
