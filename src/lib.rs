//! # fm-search
//!
//! **FM-Index based exact full-text search over a static text**
//!
//! > Count(Pattern) -> O(Pattern_Length), independent of text size.
//!
//! ## Pipeline
//!
//! raw text → sentinel → suffix array → BWT → C-table → rank structure
//!
//! - **Injectable alphabet**: [`Alphabet`] fixes the sentinel and symbol order
//!   (bytes, Unicode, or your own)
//! - **Suffix array**: naive comparison sort or prefix doubling
//!   (rayon-parallel with the `parallel` feature)
//! - **Rank**: full table, sampled checkpoints, or wavelet matrix
//!
//! ## Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | Build | O(N log² N) (prefix doubling) |
//! | Count | **O(M)** rank lookups |
//! | Locate | O(M + occ) |
//! | Contains | **O(M)** rank lookups |
//!
//! ## Example
//!
//! ```
//! use fm_search::{Error, FmIndex};
//!
//! let index = FmIndex::build(b"abracadabra").unwrap();
//!
//! assert_eq!(index.count(b"abra").unwrap(), 2);
//! assert!(index.contains(b"cadabra").unwrap());
//! assert_eq!(index.locate_all(b"abra").unwrap(), vec![0, 7]);
//!
//! // Not found is a normal outcome, bad patterns are errors
//! assert_eq!(index.count(b"xyz").unwrap(), 0);
//! assert_eq!(index.count(b"").unwrap_err(), Error::EmptyPattern);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod bitvec;
pub mod bwt;
pub mod config;
pub mod error;
pub mod occ;
pub mod search;
pub mod suffix_array;
pub mod text;
pub mod wavelet;

pub use alphabet::{Alphabet, Bytes, Chars};
pub use config::{IndexConfig, RankStrategy, SuffixSort};
pub use error::{Error, Result};
pub use search::{FmIndex, IndexStats, Locate};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        let index = FmIndex::build(b"abracadabra").unwrap();

        assert_eq!(index.count(b"abra").unwrap(), 2);
        assert_eq!(index.count(b"bra").unwrap(), 2);
        assert_eq!(index.count(b"a").unwrap(), 5);
        assert_eq!(index.count(b"xyz").unwrap(), 0);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let index = FmIndex::build(b"hello").unwrap();

        assert_eq!(index.count(b"").unwrap_err(), Error::EmptyPattern);
        assert_eq!(index.locate(b"").unwrap_err(), Error::EmptyPattern);
        assert_eq!(index.contains(b"").unwrap_err(), Error::EmptyPattern);
    }

    #[test]
    fn test_full_text_match() {
        let text = b"exactmatch";
        let index = FmIndex::build(text).unwrap();

        assert_eq!(index.count(text).unwrap(), 1);
        assert_eq!(index.locate_all(text).unwrap(), vec![0]);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let index = FmIndex::build(b"abc").unwrap();
        assert_eq!(index.count(b"abcabc").unwrap(), 0);
    }
}
