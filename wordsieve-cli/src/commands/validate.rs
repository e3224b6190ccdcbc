//! Validate command implementation

use super::{DictionaryArgs, Outcome};
use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use wordsieve_core::Context;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<Outcome> {
        let config = CliConfig::load_or_default(self.dictionary.config.as_deref())?;
        let path = config.dictionary_path(self.dictionary.dict.as_deref())?;

        println!("Validating dictionary: {}", path.display());

        match Context::from_path(&path, config.limits) {
            Ok(context) => {
                println!("✓ Dictionary is valid!");
                println!(
                    "  Words loaded: {} (capacity {})",
                    context.len(),
                    config.limits.max_words
                );
                println!("  Prefix cells: {}", context.prefix_index().occupied());
                println!("  Longest hash chain: {}", context.longest_chain());
                Ok(Outcome::Success)
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidDictionary(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(dict: PathBuf) -> ValidateArgs {
        ValidateArgs {
            dictionary: DictionaryArgs {
                dict: Some(dict),
                config: None,
            },
        }
    }

    #[test]
    fn test_validate_valid_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let dict = temp_dir.path().join("words.txt");
        fs::write(&dict, b"spam\n\xb0\xa1\xb0\xa2\n").unwrap();

        assert_eq!(args(dict).execute().unwrap(), Outcome::Success);
    }

    #[test]
    fn test_validate_encoding_violation() {
        let temp_dir = TempDir::new().unwrap();
        let dict = temp_dir.path().join("words.txt");
        fs::write(&dict, b"spam\n\xb0\n").unwrap();

        let err = args(dict).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidDictionary(_))
        ));
    }
}
