//! Chained hash index over the dictionary arena
//!
//! Bucket heads live here; the `prev`/`next` chain links live on the
//! entries themselves. Chains keep insertion order.

use crate::dictionary::{Dictionary, Slot};
use crate::error::{BuildError, BuildResult};
use crate::hash::bucket_of;

/// Bucket-head table
#[derive(Debug, Clone)]
pub struct HashIndex {
    heads: Box<[Slot]>,
}

impl HashIndex {
    /// Link every dictionary entry into its bucket chain
    ///
    /// Links left by an earlier build are discarded first.
    pub fn build(dictionary: &mut Dictionary, bucket_count: usize) -> BuildResult<Self> {
        if bucket_count == 0 {
            return Err(BuildError::InvalidArgument(
                "bucket count must be at least 1".to_string(),
            ));
        }
        let mut heads = vec![Slot::EMPTY; bucket_count].into_boxed_slice();
        for index in 0..dictionary.len() {
            if let Some(entry) = dictionary.entry_mut(Slot::new(index)) {
                entry.prev = Slot::EMPTY;
                entry.next = Slot::EMPTY;
            }
        }

        for index in 0..dictionary.len() {
            let slot = Slot::new(index);
            let bucket = match dictionary.entry(slot) {
                Some(entry) => bucket_of(entry.word(), bucket_count),
                None => continue,
            };

            if heads[bucket].is_empty() {
                heads[bucket] = slot;
                continue;
            }

            let mut tail = heads[bucket];
            while let Some(next) = dictionary.entry(tail).map(|e| e.next).filter(|s| !s.is_empty())
            {
                tail = next;
            }
            if let Some(entry) = dictionary.entry_mut(tail) {
                entry.next = slot;
            }
            if let Some(entry) = dictionary.entry_mut(slot) {
                entry.prev = tail;
            }
        }

        Ok(Self { heads })
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Head of `bucket`, or the sentinel
    pub fn head(&self, bucket: usize) -> Slot {
        self.heads.get(bucket).copied().unwrap_or(Slot::EMPTY)
    }

    /// Exact-word membership; `word` must already be case-folded
    pub fn exact_contains(&self, dictionary: &Dictionary, word: &[u8]) -> bool {
        if word.is_empty() || self.heads.is_empty() {
            return false;
        }
        self.chain(dictionary, bucket_of(word, self.heads.len()))
            .any(|slot| dictionary.entry(slot).is_some_and(|e| e.word() == word))
    }

    /// Slots in `bucket`, head first
    pub fn chain<'a>(
        &self,
        dictionary: &'a Dictionary,
        bucket: usize,
    ) -> impl Iterator<Item = Slot> + 'a {
        let mut cursor = self.head(bucket);
        std::iter::from_fn(move || {
            let slot = cursor;
            let entry = dictionary.entry(slot)?;
            cursor = entry.next;
            Some(slot)
        })
    }

    /// Length of the longest chain
    pub fn longest_chain(&self, dictionary: &Dictionary) -> usize {
        (0..self.heads.len())
            .map(|bucket| self.chain(dictionary, bucket).count())
            .max()
            .unwrap_or(0)
    }
}
