//! Prefix-length index
//!
//! A dense 256x256 grid of [`LengthMask`] cells. Row 0 is keyed by a
//! single-byte character; a row `>= 0x80` together with its column is
//! keyed by a two-byte character. Bit `k` of a cell is set when some
//! dictionary word of length `k` starts with that character, which lets
//! the scanner skip a position without touching the hash index.

use crate::dictionary::Dictionary;
use crate::error::{BuildError, BuildResult};

/// Bytes at or above this value lead a two-byte character
pub const DOUBLE_BYTE_LEAD: u8 = 0x80;

const ROW: usize = 256;

/// Set of candidate word lengths, one bit per length
///
/// Lengths above [`LengthMask::MAX_LEN`] cannot be represented: inserting
/// or removing one is a no-op and `contains` reports false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthMask(u32);

impl LengthMask {
    /// No lengths
    pub const EMPTY: LengthMask = LengthMask(0);

    /// Longest representable length
    pub const MAX_LEN: usize = u32::BITS as usize - 1;

    #[inline]
    fn bit(len: usize) -> u32 {
        u32::try_from(len)
            .ok()
            .and_then(|shift| 1u32.checked_shl(shift))
            .unwrap_or(0)
    }

    /// Add length `len`
    #[inline]
    pub fn insert(&mut self, len: usize) {
        self.0 |= Self::bit(len);
    }

    /// Drop length `len`
    #[inline]
    pub fn remove(&mut self, len: usize) {
        self.0 &= !Self::bit(len);
    }

    /// Whether length `len` is present
    #[inline]
    pub fn contains(self, len: usize) -> bool {
        self.0 & Self::bit(len) != 0
    }

    /// Whether no length is present
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits
    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Grid cell for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellKey(u16);

impl CellKey {
    /// Cell `[0][byte]` for a single-byte character
    #[inline]
    pub fn single(byte: u8) -> Self {
        debug_assert!(byte < DOUBLE_BYTE_LEAD);
        CellKey(byte as u16)
    }

    /// Cell `[lead][trail]` for a two-byte character
    #[inline]
    pub fn double(lead: u8, trail: u8) -> Self {
        CellKey(u16::from_be_bytes([lead, trail]))
    }

    /// Flat offset into the grid
    #[inline]
    fn offset(self) -> usize {
        self.0 as usize
    }
}

/// The 256x256 grid
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    cells: Box<[LengthMask]>,
}

impl PrefixIndex {
    /// Record every word's length under its leading character
    pub fn build(dictionary: &Dictionary) -> BuildResult<Self> {
        let mut cells = vec![LengthMask::EMPTY; ROW * ROW].into_boxed_slice();

        for (slot, word) in dictionary.words().enumerate() {
            let key = match *word {
                [b0, ..] if b0 < DOUBLE_BYTE_LEAD => CellKey::single(b0),
                [b0, b1, ..] => CellKey::double(b0, b1),
                [b0] => return Err(BuildError::EncodingViolation { slot, byte: b0 }),
                [] => continue,
            };
            cells[key.offset()].insert(word.len());
        }

        Ok(Self { cells })
    }

    /// Candidate lengths for `key`
    #[inline]
    pub fn mask(&self, key: CellKey) -> LengthMask {
        self.cells[key.offset()]
    }

    /// Number of cells with at least one length
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn index(words: &[&[u8]]) -> BuildResult<PrefixIndex> {
        let dictionary = Dictionary::from_words(words, &Limits::compact()).unwrap();
        PrefixIndex::build(&dictionary)
    }

    #[test]
    fn test_length_mask_bits() {
        let mut mask = LengthMask::EMPTY;
        assert!(mask.is_empty());
        mask.insert(1);
        mask.insert(31);
        assert!(mask.contains(1));
        assert!(mask.contains(31));
        assert!(!mask.contains(2));
        assert_eq!(mask.bits(), (1 << 1) | (1 << 31));
        mask.remove(1);
        mask.remove(31);
        assert!(mask.is_empty());
    }

    #[test]
    fn test_length_mask_ignores_unrepresentable_lengths() {
        let mut mask = LengthMask::EMPTY;
        mask.insert(32);
        mask.insert(usize::MAX);
        assert!(mask.is_empty());

        mask.insert(LengthMask::MAX_LEN);
        mask.remove(64);
        assert_eq!(mask.bits(), 1 << 31);
        assert!(!mask.contains(32));
        assert!(!mask.contains(usize::MAX));
    }

    #[test]
    fn test_single_byte_words_use_row_zero() {
        let index = index(&[b"spam", b"ab", b"s"]).unwrap();
        let cell = index.mask(CellKey::single(b's'));
        assert!(cell.contains(1));
        assert!(cell.contains(4));
        assert!(!cell.contains(2));
        assert!(index.mask(CellKey::single(b'a')).contains(2));
        assert!(index.mask(CellKey::single(b'z')).is_empty());
        assert_eq!(index.occupied(), 2);
    }

    #[test]
    fn test_double_byte_words_use_two_byte_cell() {
        let index = index(&[b"\xb0\xa1", b"\xb0\xa1\xb0\xa2x"]).unwrap();
        let cell = index.mask(CellKey::double(0xb0, 0xa1));
        assert!(cell.contains(2));
        assert!(cell.contains(5));
        assert!(index.mask(CellKey::double(0xb0, 0xa2)).is_empty());
        // a single-byte cell never aliases a two-byte one
        assert!(index.mask(CellKey::single(0x30)).is_empty());
    }

    #[test]
    fn test_lone_lead_byte_is_encoding_violation() {
        let err = index(&[b"ok", b"\xb0"]).unwrap_err();
        match err {
            BuildError::EncodingViolation { slot, byte } => {
                assert_eq!(slot, 1);
                assert_eq!(byte, 0xb0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
