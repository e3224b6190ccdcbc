//! Forbidden-word detection and masking for short text buffers
//!
//! Text is treated as a mix of single-byte characters (below 0x80) and
//! two-byte characters (a lead byte at or above 0x80 plus one continuation
//! byte), as in legacy double-byte encodings. Matches always start and end
//! on character boundaries.
//!
//! # Architecture
//!
//! - [`Dictionary`]: fixed-capacity arena of normalized words
//! - [`HashIndex`]: chained buckets for exact-word membership
//! - [`PrefixIndex`]: per leading character, the set of word lengths worth trying
//! - [`Context`]: the immutable bundle of the three, answering scans
//! - [`Filter`]: a handle whose context can be swapped by reloading
//!
//! # Example
//!
//! ```rust
//! use wordsieve_core::{Context, Limits};
//!
//! let context = Context::from_words(["spam", "ab"], Limits::default()).unwrap();
//! assert!(context.contains_dirty(b"this is spam mail").unwrap());
//!
//! let mut buffer = b"this is SPAM mail".to_vec();
//! assert!(context.mask_dirty(&mut buffer).unwrap());
//! assert_eq!(buffer, b"this is **** mail");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod hash;
pub mod hash_index;
pub mod matcher;
pub mod prefix_index;

pub use config::Limits;
pub use context::{Context, Source};
pub use dictionary::{Dictionary, Entry, Slot};
pub use error::{BuildError, BuildResult, Error, MatchError, MatchResult};
pub use filter::Filter;
pub use hash_index::HashIndex;
pub use matcher::{Match, Step};
pub use prefix_index::{CellKey, LengthMask, PrefixIndex};
