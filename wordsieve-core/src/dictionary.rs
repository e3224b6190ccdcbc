//! Dictionary loading and the fixed-capacity entry arena
//!
//! Words are stored inline in [`Entry`] values held by one contiguous
//! arena that is reserved up front and never grows past its capacity.
//! Entries refer to each other through [`Slot`] indices, so the whole
//! table can be moved or cloned without fixing up links.

use crate::config::{Limits, MAX_WORD_LEN_CEILING};
use crate::error::{BuildError, BuildResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Index of an entry in the arena, or the empty sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u32);

impl Slot {
    /// Marks an empty bucket or the end of a chain
    pub const EMPTY: Slot = Slot(u32::MAX);

    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize);
        Slot(index as u32)
    }

    /// The arena index, `None` for the sentinel
    #[inline]
    pub fn index(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Whether this is the sentinel
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// A normalized dictionary word plus its hash-bucket chain links
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    word: [u8; MAX_WORD_LEN_CEILING],
    len: u8,
    pub(crate) prev: Slot,
    pub(crate) next: Slot,
}

impl Entry {
    fn new(word: &[u8]) -> Self {
        let mut buf = [0u8; MAX_WORD_LEN_CEILING];
        buf[..word.len()].copy_from_slice(word);
        Self {
            word: buf,
            len: word.len() as u8,
            prev: Slot::EMPTY,
            next: Slot::EMPTY,
        }
    }

    /// The stored word bytes
    #[inline]
    pub fn word(&self) -> &[u8] {
        &self.word[..self.len as usize]
    }

    /// Previous entry in the same bucket
    pub fn prev(&self) -> Slot {
        self.prev
    }

    /// Next entry in the same bucket
    pub fn next(&self) -> Slot {
        self.next
    }
}

/// ASCII-only case folding; bytes >= 0x80 pass through
#[inline]
pub fn fold_case(bytes: &mut [u8]) {
    bytes.make_ascii_lowercase();
}

/// Drop every trailing `\r` and `\n`
fn strip_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\r' | b'\n'] = line {
        line = rest;
    }
    line
}

/// Outcome of offering one line to the arena
enum Admit {
    Added,
    Skipped,
    Full,
}

/// The word table
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    capacity: usize,
    max_word_len: usize,
}

impl Dictionary {
    /// Reserve an empty arena for `limits.max_words` entries
    pub fn with_limits(limits: &Limits) -> BuildResult<Self> {
        limits.validate()?;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(limits.max_words)
            .map_err(|_| BuildError::AllocationFailure {
                capacity: limits.max_words,
            })?;
        Ok(Self {
            entries,
            capacity: limits.max_words,
            max_word_len: limits.max_word_len,
        })
    }

    /// Load a word-per-line file
    pub fn from_path(path: impl AsRef<Path>, limits: &Limits) -> BuildResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BuildError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(BufReader::new(file), path, limits)
    }

    /// Load from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R, limits: &Limits) -> BuildResult<Self> {
        Self::load(reader, Path::new("<reader>"), limits)
    }

    /// Build from in-memory words, normalized the same way as file lines
    pub fn from_words<I, W>(words: I, limits: &Limits) -> BuildResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut dictionary = Self::with_limits(limits)?;
        let mut line = Vec::with_capacity(MAX_WORD_LEN_CEILING);
        for word in words {
            line.clear();
            line.extend_from_slice(word.as_ref());
            if let Admit::Full = dictionary.admit(&mut line) {
                break;
            }
        }
        log::debug!("loaded {} dictionary words from memory", dictionary.len());
        Ok(dictionary)
    }

    fn load<R: BufRead>(mut reader: R, origin: &Path, limits: &Limits) -> BuildResult<Self> {
        let mut dictionary = Self::with_limits(limits)?;
        let mut line = Vec::with_capacity(64);
        let mut skipped = 0usize;
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| BuildError::SourceUnavailable {
                    path: origin.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            match dictionary.admit(&mut line) {
                Admit::Added => {}
                Admit::Skipped => skipped += 1,
                Admit::Full => {
                    log::debug!(
                        "{}: word capacity {} reached, ignoring the rest",
                        origin.display(),
                        dictionary.capacity
                    );
                    break;
                }
            }
        }
        log::debug!(
            "loaded {} dictionary words from {} ({} lines skipped)",
            dictionary.len(),
            origin.display(),
            skipped
        );
        Ok(dictionary)
    }

    /// Normalize one raw line in place and append it if admissible
    fn admit(&mut self, line: &mut Vec<u8>) -> Admit {
        if self.entries.len() >= self.capacity {
            return Admit::Full;
        }
        let len = strip_line_end(line).len();
        line.truncate(len);
        if line.is_empty() {
            return Admit::Skipped;
        }
        if line.len() > self.max_word_len {
            log::warn!(
                "skipping dictionary word of {} bytes (limit {})",
                line.len(),
                self.max_word_len
            );
            return Admit::Skipped;
        }
        fold_case(line);
        self.entries.push(Entry::new(line));
        Admit::Added
    }

    /// Number of admitted words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word was admitted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word capacity of the arena
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum admissible word length
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Entry at `slot`
    #[inline]
    pub fn entry(&self, slot: Slot) -> Option<&Entry> {
        slot.index().and_then(|i| self.entries.get(i))
    }

    pub(crate) fn entry_mut(&mut self, slot: Slot) -> Option<&mut Entry> {
        slot.index().and_then(move |i| self.entries.get_mut(i))
    }

    /// All entries in slot order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All words in slot order
    pub fn words(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.iter().map(Entry::word)
    }
}
