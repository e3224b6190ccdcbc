//! Word hashing

use xxhash_rust::xxh32::xxh32;

/// Fixed seed so bucket placement is stable for the life of the process
const SEED: u32 = 0x5157_0d1e;

/// 32-bit digest of a byte span
#[inline]
pub fn word_hash(bytes: &[u8]) -> u32 {
    xxh32(bytes, SEED)
}

/// Bucket for a byte span in a table of `bucket_count` heads
#[inline]
pub fn bucket_of(bytes: &[u8], bucket_count: usize) -> usize {
    word_hash(bytes) as usize % bucket_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(word_hash(b"spam"), word_hash(b"spam"));
        assert_ne!(word_hash(b"spam"), word_hash(b"spa"));
    }

    #[test]
    fn test_bucket_in_range() {
        for word in [&b"a"[..], b"ab", b"\xb0\xa1", b"longer word"] {
            assert!(bucket_of(word, 7) < 7);
        }
    }
}
