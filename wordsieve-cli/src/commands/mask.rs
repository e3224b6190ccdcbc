//! Mask command implementation

use super::{DictionaryArgs, Outcome};
use crate::error::CliError;
use crate::input::{lines, FileReader};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use wordsieve_core::Filter;

/// Arguments for the mask command
#[derive(Debug, Args)]
pub struct MaskArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self) -> Result<Outcome> {
        let (_, filter) = self.dictionary.load()?;
        let data = FileReader::read_input(&self.input)?;

        let (masked, changed) = mask_lines(&filter, &data, &self.input.display().to_string())?;
        log::info!("masked {changed} lines of {}", self.input.display());

        match &self.output {
            Some(path) => fs::write(path, &masked)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&masked)?;
                stdout.flush()?;
            }
        }
        Ok(Outcome::Success)
    }
}

/// Mask every line of `data`, keeping line terminators; returns the output
/// and the number of lines that changed
pub fn mask_lines(filter: &Filter, data: &[u8], origin: &str) -> Result<(Vec<u8>, usize)> {
    let mut output = Vec::with_capacity(data.len());
    let mut changed = 0usize;

    for line in lines(data) {
        let mut content = line.content.to_vec();
        let masked = filter
            .mask_dirty(&mut content)
            .map_err(|e| CliError::ScanError {
                location: format!("{origin}:{}", line.number),
                reason: e.to_string(),
            })?;
        if masked {
            changed += 1;
        }
        output.extend_from_slice(&content);
        output.extend_from_slice(line.ending);
    }

    Ok((output, changed))
}
