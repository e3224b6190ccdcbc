//! Generate config command implementation

use super::Outcome;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordsieve_core::Limits;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Dictionary path written into the template
    #[arg(short, long, value_name = "FILE")]
    pub dict: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<Outcome> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [dictionary] path at your word list");
        println!("2. Validate the dictionary:");
        println!("   wordsieve validate --config {}", self.output.display());
        println!("3. Use it for checking:");
        println!(
            "   wordsieve check -i input.txt --config {}",
            self.output.display()
        );

        Ok(Outcome::Success)
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let limits = Limits::default();
        let dict = self
            .dict
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "words.txt".to_string());
        format!(
            r#"# wordsieve configuration

[dictionary]
# One forbidden word per line; ASCII letters are matched case-insensitively
path = "{dict}"

[limits]
# Words past this count are ignored
max_words = {max_words}
# Longest admissible word in bytes (at most 31)
max_word_len = {max_word_len}
# Longest scanned line in bytes
max_input_len = {max_input_len}
# Byte written over matches (42 = '*')
replacement = {replacement}

[output]
# "text" or "json"
format = "text"
pretty_json = true

[performance]
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#,
            max_words = limits.max_words,
            max_word_len = limits.max_word_len,
            max_input_len = limits.max_input_len,
            replacement = limits.replacement,
        )
    }
}
