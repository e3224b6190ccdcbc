//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A line containing at least one dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtyLine {
    /// Source file
    pub path: String,
    /// 1-based line number
    pub line: usize,
    /// Byte ranges `[start, end)` of every match in the line
    pub spans: Vec<(usize, usize)>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single dirty line
    fn format_line(&mut self, record: &DirtyLine) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
