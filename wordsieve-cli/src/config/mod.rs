//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wordsieve_core::Limits;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Engine limits
    #[serde(default)]
    pub limits: Limits,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Dictionary path, preferring the command-line value
    pub fn dictionary_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.dictionary.path.clone())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no dictionary given (use --dict or [dictionary] path)".to_string(),
                )
                .into()
            })
    }

    /// Worker threads, resolving 0 to the number of CPUs
    pub fn worker_threads(&self, flag: Option<usize>) -> usize {
        match flag.unwrap_or(self.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DictionaryConfig {
    /// Word-per-line dictionary file
    pub path: Option<PathBuf>,
}

/// Report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path:line:start-end` record per dirty line
    #[default]
    Text,
    /// JSON array of dirty line records
    Json,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.dictionary.path.is_none());
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 0);
        assert!(config.worker_threads(None) >= 1);
        assert_eq!(config.worker_threads(Some(3)), 3);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[dictionary]
path = "words.txt"

[limits]
max_words = 64
replacement = 35

[output]
format = "json"
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.dictionary.path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.limits.max_words, 64);
        assert_eq!(config.limits.replacement, b'#');
        assert_eq!(config.limits.max_word_len, Limits::default().max_word_len);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[limits]\nmax_words = \"many\"\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_dictionary_flag_overrides_config() {
        let config = CliConfig {
            dictionary: DictionaryConfig {
                path: Some(PathBuf::from("from-config.txt")),
            },
            ..CliConfig::default()
        };
        assert_eq!(
            config.dictionary_path(Some(Path::new("flag.txt"))).unwrap(),
            PathBuf::from("flag.txt")
        );
        assert_eq!(
            config.dictionary_path(None).unwrap(),
            PathBuf::from("from-config.txt")
        );
        assert!(CliConfig::default().dictionary_path(None).is_err());
    }
}
