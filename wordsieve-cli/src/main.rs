//! wordsieve command-line entry point

use clap::Parser;
use std::process::ExitCode;
use wordsieve_cli::commands::{Commands, Outcome};

/// Detect and mask forbidden words in text files
#[derive(Debug, Parser)]
#[command(name = "wordsieve", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    match cli.command.execute() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::DirtyFound) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
