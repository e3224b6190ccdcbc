//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Dictionary could not be built
    InvalidDictionary(String),
    /// A line could not be scanned
    ScanError {
        /// `path:line` of the offending input
        location: String,
        /// Why the scan failed
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {msg}"),
            CliError::ScanError { location, reason } => {
                write!(f, "Cannot scan {location}: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("no dictionary given".to_string());
        assert_eq!(error.to_string(), "Configuration error: no dictionary given");
    }

    #[test]
    fn test_invalid_dictionary_display() {
        let error = CliError::InvalidDictionary("lone lead byte".to_string());
        assert_eq!(error.to_string(), "Invalid dictionary: lone lead byte");
    }

    #[test]
    fn test_scan_error_display() {
        let error = CliError::ScanError {
            location: "input.txt:3".to_string(),
            reason: "truncated double-byte character at offset 9".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot scan input.txt:3: truncated double-byte character at offset 9"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ConfigError("bad".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }

    #[test]
    fn test_cli_result_downcast() {
        let failure: CliResult<()> = Err(CliError::InvalidPattern("*.{".to_string()).into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
