//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use wordsieve_core::{Filter, Source};

pub mod check;
pub mod generate_config;
pub mod mask;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report lines containing dictionary words
    Check(check::CheckArgs),

    /// Overwrite dictionary words with the replacement byte
    Mask(mask::MaskArgs),

    /// Build a dictionary and report its statistics
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report
    Success,
    /// At least one dictionary word was found
    DirtyFound,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<Outcome> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::Mask(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Dictionary and configuration flags shared by the scanning commands
#[derive(Debug, Clone, Args)]
pub struct DictionaryArgs {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl DictionaryArgs {
    /// Load the configuration and build the dictionary it names
    pub fn load(&self) -> Result<(CliConfig, Filter)> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let path = config.dictionary_path(self.dict.as_deref())?;
        log::debug!("dictionary: {}, limits: {:?}", path.display(), config.limits);

        let filter = Filter::create(&Source::Path(path.clone()), config.limits)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
        Ok((config, filter))
    }
}
