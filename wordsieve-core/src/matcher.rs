//! Scanning algorithms
//!
//! A cursor walks a case-folded copy of the input one character at a time.
//! At each position the prefix-length index says which word lengths could
//! start there; only those spans are confirmed against the hash index.
//! Lengths are tried shortest first, and a confirmed match moves the cursor
//! past the whole span, so reported matches never overlap.

use crate::context::Context;
use crate::dictionary::fold_case;
use crate::error::{MatchError, MatchResult};
use crate::prefix_index::{CellKey, LengthMask, DOUBLE_BYTE_LEAD};
use smallvec::SmallVec;
use std::ops::Range;

/// Inputs up to this size are folded on the stack
const INLINE_SCRATCH: usize = 512;

type Scratch = SmallVec<[u8; INLINE_SCRATCH]>;

/// The character under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A byte below 0x80
    Single(u8),
    /// A lead byte >= 0x80 and its continuation byte
    Double(u8, u8),
}

impl Step {
    /// Decode the character starting at `pos`
    ///
    /// A position at or past the end of `text` is an encoding error.
    #[inline]
    pub fn at(text: &[u8], pos: usize) -> MatchResult<Self> {
        match text.get(pos..) {
            Some(&[b0, ..]) if b0 < DOUBLE_BYTE_LEAD => Ok(Step::Single(b0)),
            Some(&[b0, b1, ..]) => Ok(Step::Double(b0, b1)),
            _ => Err(MatchError::EncodingError { position: pos }),
        }
    }

    /// Bytes the cursor advances when nothing matches here
    #[inline]
    pub fn width(self) -> usize {
        match self {
            Step::Single(_) => 1,
            Step::Double(..) => 2,
        }
    }

    /// Prefix-index cell for this character
    #[inline]
    pub fn key(self) -> CellKey {
        match self {
            Step::Single(b0) => CellKey::single(b0),
            Step::Double(b0, b1) => CellKey::double(b0, b1),
        }
    }
}

/// A dictionary word found in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Matched length in bytes
    pub len: usize,
}

impl Match {
    /// Offset one past the last matched byte
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Byte range of the match
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Left-to-right iterator over non-overlapping matches in folded text
///
/// Yields at most one error, after which it is exhausted.
struct Matches<'a> {
    context: &'a Context,
    text: &'a [u8],
    pos: usize,
}

impl<'a> Matches<'a> {
    fn new(context: &'a Context, text: &'a [u8]) -> Self {
        Self {
            context,
            text,
            pos: 0,
        }
    }

    /// Shortest dictionary word starting at `pos` among the lengths in `mask`
    fn match_len_at(&self, pos: usize, mut mask: LengthMask) -> Option<usize> {
        for len in 1..=self.context.limits().max_word_len {
            if !mask.contains(len) {
                continue;
            }
            if pos + len > self.text.len() {
                break;
            }
            if self.context.exact_contains(&self.text[pos..pos + len]) {
                return Some(len);
            }
            mask.remove(len);
            if mask.is_empty() {
                break;
            }
        }
        None
    }
}

impl Iterator for Matches<'_> {
    type Item = MatchResult<Match>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let step = match Step::at(self.text, self.pos) {
                Ok(step) => step,
                Err(err) => {
                    self.pos = self.text.len();
                    return Some(Err(err));
                }
            };

            let mask = self.context.prefix_index().mask(step.key());
            if !mask.is_empty() {
                if let Some(len) = self.match_len_at(self.pos, mask) {
                    let found = Match {
                        start: self.pos,
                        len,
                    };
                    self.pos += len;
                    return Some(Ok(found));
                }
            }
            self.pos += step.width();
        }
        None
    }
}

fn folded(context: &Context, buffer: &[u8]) -> MatchResult<Scratch> {
    let max = context.limits().max_input_len;
    if buffer.len() > max {
        return Err(MatchError::InputTooLong {
            len: buffer.len(),
            max,
        });
    }
    let mut scratch = Scratch::from_slice(buffer);
    fold_case(&mut scratch);
    Ok(scratch)
}

/// Whether any dictionary word occurs in `buffer`; stops at the first hit
pub(crate) fn contains_dirty(context: &Context, buffer: &[u8]) -> MatchResult<bool> {
    let scratch = folded(context, buffer)?;
    let first = Matches::new(context, &scratch).next();
    first.transpose().map(|found| found.is_some())
}

/// Every non-overlapping match in `buffer`, left to right
pub(crate) fn find_dirty(context: &Context, buffer: &[u8]) -> MatchResult<Vec<Match>> {
    let scratch = folded(context, buffer)?;
    Matches::new(context, &scratch).collect()
}

/// Overwrite every match with the replacement byte
///
/// The scan completes before the first write, so an error leaves `buffer`
/// unchanged.
pub(crate) fn mask_dirty(context: &Context, buffer: &mut [u8]) -> MatchResult<bool> {
    let scratch = folded(context, buffer)?;
    let found = Matches::new(context, &scratch).collect::<MatchResult<SmallVec<[Match; 8]>>>()?;
    let replacement = context.limits().replacement;
    for m in &found {
        buffer[m.range()].fill(replacement);
    }
    Ok(!found.is_empty())
}
