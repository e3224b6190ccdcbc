//! Engine limits

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};

/// Widest word length a 32-bit length mask can describe (bit 0 is unused)
pub const MAX_WORD_LEN_CEILING: usize = 31;

/// Fixed sizing and replacement settings for a [`Context`](crate::Context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of dictionary words admitted; extra lines are ignored
    pub max_words: usize,
    /// Maximum byte length of a dictionary word
    pub max_word_len: usize,
    /// Maximum byte length of a scanned buffer
    pub max_input_len: usize,
    /// Byte written over every masked position
    pub replacement: u8,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_words: 16 * 1024,
            max_word_len: MAX_WORD_LEN_CEILING,
            max_input_len: 4096,
            replacement: b'*',
        }
    }
}

impl Limits {
    /// Limits sized for a small dictionary
    pub fn compact() -> Self {
        Self {
            max_words: 1024,
            ..Self::default()
        }
    }

    /// Set the word capacity
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the maximum word length
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Set the maximum input length
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the replacement byte
    pub fn with_replacement(mut self, replacement: u8) -> Self {
        self.replacement = replacement;
        self
    }

    /// Number of hash buckets, three per admissible word
    pub fn bucket_count(&self) -> usize {
        self.max_words * 3
    }

    /// Check that every limit is usable
    pub fn validate(&self) -> BuildResult<()> {
        if self.max_words == 0 {
            return Err(BuildError::InvalidArgument(
                "max_words must be at least 1".to_string(),
            ));
        }
        // Slot indices are stored as u32 with one value reserved for the sentinel
        if self.max_words >= u32::MAX as usize {
            return Err(BuildError::InvalidArgument(format!(
                "max_words must be below {}",
                u32::MAX
            )));
        }
        if self.max_word_len == 0 || self.max_word_len > MAX_WORD_LEN_CEILING {
            return Err(BuildError::InvalidArgument(format!(
                "max_word_len must be within 1..={MAX_WORD_LEN_CEILING}, got {}",
                self.max_word_len
            )));
        }
        if self.max_input_len == 0 {
            return Err(BuildError::InvalidArgument(
                "max_input_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
