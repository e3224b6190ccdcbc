//! The immutable matching context

use crate::config::Limits;
use crate::dictionary::{fold_case, Dictionary};
use crate::error::{BuildResult, MatchResult};
use crate::hash_index::HashIndex;
use crate::matcher::{self, Match};
use crate::prefix_index::PrefixIndex;
use smallvec::SmallVec;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Where a dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A word-per-line file
    Path(PathBuf),
    /// Words held in memory
    Words(Vec<Vec<u8>>),
}

impl Source {
    /// In-memory source from anything byte-like
    pub fn words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        Source::Words(words.into_iter().map(|w| w.as_ref().to_vec()).collect())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

/// Dictionary table plus both indexes, read-only once built
///
/// A `Context` is `Send + Sync`; any number of scans may share one.
#[derive(Debug, Clone)]
pub struct Context {
    dictionary: Dictionary,
    hash_index: HashIndex,
    prefix_index: PrefixIndex,
    limits: Limits,
}

impl Context {
    /// Load `source` and build both indexes
    pub fn create(source: &Source, limits: Limits) -> BuildResult<Self> {
        match source {
            Source::Path(path) => Self::from_path(path, limits),
            Source::Words(words) => Self::from_words(words, limits),
        }
    }

    /// Build from a word-per-line file
    pub fn from_path(path: impl AsRef<Path>, limits: Limits) -> BuildResult<Self> {
        Self::from_dictionary(Dictionary::from_path(path, &limits)?, limits)
    }

    /// Build from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R, limits: Limits) -> BuildResult<Self> {
        Self::from_dictionary(Dictionary::from_reader(reader, &limits)?, limits)
    }

    /// Build from in-memory words
    pub fn from_words<I, W>(words: I, limits: Limits) -> BuildResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        Self::from_dictionary(Dictionary::from_words(words, &limits)?, limits)
    }

    fn from_dictionary(mut dictionary: Dictionary, limits: Limits) -> BuildResult<Self> {
        let hash_index = HashIndex::build(&mut dictionary, limits.bucket_count())?;
        let prefix_index = PrefixIndex::build(&dictionary)?;
        let context = Self {
            dictionary,
            hash_index,
            prefix_index,
            limits,
        };
        log::debug!(
            "built context: {} words, {} prefix cells, longest chain {}",
            context.len(),
            context.prefix_index.occupied(),
            context.longest_chain()
        );
        Ok(context)
    }

    /// Number of dictionary words
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Limits this context was built with
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// The word table
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The hash index
    pub fn hash_index(&self) -> &HashIndex {
        &self.hash_index
    }

    /// The prefix-length index
    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix_index
    }

    /// Longest hash bucket chain
    pub fn longest_chain(&self) -> usize {
        self.hash_index.longest_chain(&self.dictionary)
    }

    /// Exact membership of an already case-folded span
    #[inline]
    pub fn exact_contains(&self, word: &[u8]) -> bool {
        self.hash_index.exact_contains(&self.dictionary, word)
    }

    /// Membership of `word` after case folding
    pub fn contains_word(&self, word: impl AsRef<[u8]>) -> bool {
        let mut folded: SmallVec<[u8; 32]> = SmallVec::from_slice(word.as_ref());
        fold_case(&mut folded);
        self.exact_contains(&folded)
    }

    /// Whether `buffer` contains any dictionary word
    pub fn contains_dirty(&self, buffer: &[u8]) -> MatchResult<bool> {
        matcher::contains_dirty(self, buffer)
    }

    /// Overwrite every dictionary word in `buffer`; true if anything changed
    pub fn mask_dirty(&self, buffer: &mut [u8]) -> MatchResult<bool> {
        matcher::mask_dirty(self, buffer)
    }

    /// Spans `mask_dirty` would overwrite
    pub fn find_dirty(&self, buffer: &[u8]) -> MatchResult<Vec<Match>> {
        matcher::find_dirty(self, buffer)
    }
}
