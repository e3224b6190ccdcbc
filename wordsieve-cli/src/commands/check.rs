//! Check command implementation

use super::{DictionaryArgs, Outcome};
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::input::{lines, resolve_patterns, FileReader};
use crate::output::{DirtyLine, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use rayon::prelude::*;
use std::io;
use std::path::Path;
use wordsieve_core::Context;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Worker threads (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<Outcome> {
        let (config, filter) = self.dictionary.load()?;
        let files = resolve_patterns(&self.input)?;
        let format = self.format.unwrap_or(config.output.format);
        let threads = config.worker_threads(self.threads);

        log::info!("checking {} files on {} threads", files.len(), threads);

        let context = filter.snapshot();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker pool")?;
        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<Vec<DirtyLine>> {
                    let records = scan_file(&context, path)?;
                    progress.file_completed(&path.display().to_string());
                    Ok(records)
                })
                .collect::<Result<Vec<_>>>()
        });
        progress.finish();
        let reports = reports?;

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(io::stdout(), config.output.pretty_json))
            }
        };
        let mut dirty = 0usize;
        for record in reports.iter().flatten() {
            formatter.format_line(record)?;
            dirty += 1;
        }
        formatter.finish()?;

        log::info!("{dirty} dirty lines in {} files", files.len());
        Ok(if dirty > 0 {
            Outcome::DirtyFound
        } else {
            Outcome::Success
        })
    }
}

/// Scan every line of `path`, returning the lines that contain matches
pub fn scan_file(context: &Context, path: &Path) -> Result<Vec<DirtyLine>> {
    let data = FileReader::read_bytes(path)?;
    let display = path.display().to_string();
    let mut records = Vec::new();

    for line in lines(&data) {
        let found = context
            .find_dirty(line.content)
            .map_err(|e| CliError::ScanError {
                location: format!("{display}:{}", line.number),
                reason: e.to_string(),
            })?;
        if !found.is_empty() {
            records.push(DirtyLine {
                path: display.clone(),
                line: line.number,
                spans: found.iter().map(|m| (m.start, m.end())).collect(),
            });
        }
    }

    log::debug!("{display}: {} dirty lines", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wordsieve_core::Limits;

    #[test]
    fn test_scan_file_reports_spans() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mail.txt");
        fs::write(&path, "hello\r\nthis is SPAM mail\nspam spam\n").unwrap();

        let context = Context::from_words(["spam"], Limits::default()).unwrap();
        let records = scan_file(&context, &path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[0].spans, vec![(8, 12)]);
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].spans, vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn test_scan_file_reports_location_of_bad_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.txt");
        fs::write(&path, b"fine\nends badly \xb0\n").unwrap();

        let context = Context::from_words(["zzz"], Limits::default()).unwrap();
        let err = scan_file(&context, &path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken.txt:2"), "{message}");
        assert!(message.contains("offset 11"), "{message}");
    }
}
