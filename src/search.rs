//! FM-Index search
//!
//! **Core Algorithm**: Backward Search
//! - Process pattern from right to left
//! - Use LF-mapping: `new_pos = C[c] + Rank(c, old_pos)`
//! - Complexity: O(M) rank lookups where M = pattern length
//!
//! The suffix array is kept whole, so locating an occurrence is one lookup.

extern crate alloc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::alphabet::{Alphabet, Bytes, Chars, SymbolTable};
use crate::bwt::{build_bwt, CTable};
use crate::config::{IndexConfig, RankStrategy, SuffixSort};
use crate::error::{Error, Result};
use crate::occ::{Occurrences, RankStructure};
use crate::suffix_array::build_suffix_array;
use crate::text::Text;

/// FM-Index over a static text.
///
/// Built once; every query borrows it immutably, so a shared `&FmIndex`
/// can serve any number of threads.
#[derive(Clone, Debug)]
pub struct FmIndex<A: Alphabet = Bytes> {
    alphabet: A,
    symbols: SymbolTable<A::Symbol>,
    /// Coded text, sentinel included
    text: Vec<u32>,
    /// Full suffix array of the sentineled text
    sa: Vec<usize>,
    c_table: CTable,
    /// BWT + Rank support
    occ: RankStructure,
    config: IndexConfig,
}

impl FmIndex<Bytes> {
    /// Build a byte index with sentinel `$` and the default configuration.
    ///
    /// # Example
    /// ```
    /// use fm_search::FmIndex;
    ///
    /// let index = FmIndex::build(b"banana").unwrap();
    /// assert_eq!(index.count(b"ana").unwrap(), 2);
    /// assert_eq!(index.locate_all(b"ana").unwrap(), vec![1, 3]);
    /// ```
    pub fn build(text: &[u8]) -> Result<Self> {
        Self::build_with(text, Bytes::default(), IndexConfig::default())
    }
}

impl FmIndex<Chars> {
    /// Build an index over the Unicode scalar values of `text`.
    pub fn build_chars(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        Self::build_with(&chars, Chars::default(), IndexConfig::default())
    }
}

impl<A: Alphabet> FmIndex<A> {
    /// Build index from text
    ///
    /// Fails with [`Error::SentinelCollision`] if `text` contains the
    /// alphabet's sentinel. No partial index is ever produced.
    ///
    /// # Complexity
    /// - Time: O(N log² N) with prefix doubling
    /// - Space: depends on [`RankStrategy`]; the suffix array is N words
    pub fn build_with(text: &[A::Symbol], alphabet: A, config: IndexConfig) -> Result<Self> {
        let (symbols, codes) = Text::new(text, &alphabet)?.into_parts();
        let sigma = symbols.len();

        let sa = build_suffix_array(&codes, config.suffix_sort);
        let bwt = build_bwt(&codes, &sa);
        let c_table = CTable::build(&codes, sigma);
        let occ = RankStructure::build(&bwt, sigma, config.rank);

        let config = IndexConfig {
            rank: occ.strategy(),
            ..config
        };

        Ok(Self {
            alphabet,
            symbols,
            text: codes,
            sa,
            c_table,
            occ,
            config,
        })
    }

    /// Count occurrences of a pattern in O(M) rank lookups
    ///
    /// # Example
    /// ```
    /// use fm_search::FmIndex;
    ///
    /// let index = FmIndex::build(b"abracadabra").unwrap();
    /// assert_eq!(index.count(b"abra").unwrap(), 2);
    /// assert_eq!(index.count(b"xyz").unwrap(), 0);
    /// ```
    #[inline]
    pub fn count(&self, pattern: &[A::Symbol]) -> Result<usize> {
        let range = self.backward_search(pattern)?;
        Ok(range.end - range.start)
    }

    /// Offsets of every occurrence, in suffix-array order (not sorted).
    ///
    /// Offsets index the original text, without the sentinel.
    ///
    /// # Example
    /// ```
    /// use fm_search::FmIndex;
    ///
    /// let index = FmIndex::build(b"abracadabra").unwrap();
    /// let mut positions: Vec<_> = index.locate(b"abra").unwrap().collect();
    /// positions.sort_unstable();
    /// assert_eq!(positions, vec![0, 7]);
    /// ```
    #[inline]
    pub fn locate(&self, pattern: &[A::Symbol]) -> Result<Locate<'_>> {
        let range = self.backward_search(pattern)?;
        Ok(Locate {
            rows: self.sa[range].iter(),
        })
    }

    /// Offsets of every occurrence, sorted ascending.
    pub fn locate_all(&self, pattern: &[A::Symbol]) -> Result<Vec<usize>> {
        let mut positions: Vec<usize> = self.locate(pattern)?.collect();
        positions.sort_unstable();
        Ok(positions)
    }

    /// Check if pattern exists in text
    #[inline]
    pub fn contains(&self, pattern: &[A::Symbol]) -> Result<bool> {
        Ok(!self.backward_search(pattern)?.is_empty())
    }

    /// Half-open range of suffix-array rows whose suffixes start with `pattern`.
    ///
    /// An absent pattern yields an empty range, not an error.
    #[inline]
    pub fn search_range(&self, pattern: &[A::Symbol]) -> Result<Range<usize>> {
        self.backward_search(pattern)
    }

    /// Same range as [`search_range`](Self::search_range), found by binary
    /// search over the suffix array against the coded text.
    ///
    /// Touches neither the BWT nor the rank structure. O(M log N).
    pub fn search_range_sa(&self, pattern: &[A::Symbol]) -> Result<Range<usize>> {
        self.validate(pattern)?;

        let mut coded = Vec::with_capacity(pattern.len());
        for c in pattern {
            match self.symbols.encode(&self.alphabet, c) {
                Some(code) => coded.push(code),
                None => return Ok(0..0),
            }
        }

        let m = coded.len();
        let text = &self.text[..];
        let prefix = move |start: usize| &text[start..(start + m).min(text.len())];

        let lo = self.sa.partition_point(|&row| prefix(row) < &coded[..]);
        let hi = lo + self.sa[lo..].partition_point(|&row| prefix(row) == &coded[..]);

        if lo == hi {
            return Ok(0..0);
        }
        Ok(lo..hi)
    }

    /// Backward Search Algorithm (FM-Index Core)
    ///
    /// The pattern is validated in full before any lookup, so a sentinel
    /// anywhere in it is rejected even when an earlier step would already
    /// have ruled out a match.
    fn backward_search(&self, pattern: &[A::Symbol]) -> Result<Range<usize>> {
        self.validate(pattern)?;

        if pattern.len() > self.text_len() {
            return Ok(0..0);
        }

        let mut sp = 0;
        let mut ep = self.len();

        for c in pattern.iter().rev() {
            // Symbol never seen in the text
            let Some(code) = self.symbols.encode(&self.alphabet, c) else {
                return Ok(0..0);
            };

            let start = self.c_table.get(code);
            sp = start + self.occ.rank(code, sp);
            ep = start + self.occ.rank(code, ep);

            if sp >= ep {
                return Ok(0..0);
            }
        }

        Ok(sp..ep)
    }

    fn validate(&self, pattern: &[A::Symbol]) -> Result<()> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let sentinel = self.alphabet.sentinel();
        match pattern.iter().position(|&s| s == sentinel) {
            Some(position) => Err(Error::SentinelInPattern { position }),
            None => Ok(()),
        }
    }

    /// LF-mapping: row of the suffix starting one position earlier.
    #[inline]
    fn lf(&self, row: usize) -> usize {
        let code = self.occ.symbol_at(row);
        self.c_table.get(code) + self.occ.rank(code, row)
    }

    /// Reconstruct the original text by walking LF from the sentinel row.
    ///
    /// Reads only the BWT, C-table and rank structure.
    pub fn recover_text(&self) -> Vec<A::Symbol> {
        let n = self.text_len();
        let mut raw = Vec::with_capacity(n);
        let mut row = 0;

        for _ in 0..n {
            raw.push(self.symbols.decode(self.occ.symbol_at(row)));
            row = self.lf(row);
        }

        raw.reverse();
        raw
    }

    /// Suffix array of the sentineled text. `SA[0]` is the sentinel offset.
    #[inline]
    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    /// BWT of the sentineled text, decoded back to symbols.
    pub fn bwt(&self) -> impl Iterator<Item = A::Symbol> + '_ {
        (0..self.len()).map(move |i| self.symbols.decode(self.occ.symbol_at(i)))
    }

    /// `C[symbol]`: number of text symbols (sentinel included) smaller than
    /// `symbol`. `None` if the symbol does not occur.
    pub fn c_value(&self, symbol: &A::Symbol) -> Option<usize> {
        self.symbols
            .encode(&self.alphabet, symbol)
            .map(|code| self.c_table.get(code))
    }

    /// `(symbol, C[symbol])` for every occurring symbol, sentinel first.
    pub fn c_table(&self) -> impl Iterator<Item = (A::Symbol, usize)> + '_ {
        self.symbols
            .symbols()
            .iter()
            .copied()
            .zip(self.c_table.as_slice().iter().copied())
    }

    /// Occurrences of `symbol` in `BWT[0..k)`; zero for absent symbols.
    pub fn rank(&self, symbol: &A::Symbol, k: usize) -> usize {
        self.symbols
            .encode(&self.alphabet, symbol)
            .map_or(0, |code| self.occ.rank(code, k))
    }

    /// Total occurrences of `symbol` in the sentineled text.
    pub fn occ(&self, symbol: &A::Symbol) -> usize {
        self.rank(symbol, self.len())
    }

    /// Distinct symbols in code order, sentinel first.
    pub fn symbols(&self) -> &[A::Symbol] {
        self.symbols.symbols()
    }

    /// Number of distinct symbols including the sentinel (σ).
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    #[inline]
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Length of the sentineled text.
    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    /// Never true: the sentinel is always indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Original text length (excluding sentinel)
    #[inline]
    pub fn text_len(&self) -> usize {
        self.len() - 1
    }

    /// Index size in bytes (approximate, heap only)
    pub fn size_bytes(&self) -> usize {
        let sa_size = self.sa.len() * core::mem::size_of::<usize>();
        let text_size = self.text.len() * core::mem::size_of::<u32>();
        let c_table_size = (self.c_table.sigma() + 1) * core::mem::size_of::<usize>();
        let symbols_size = self.symbols.len() * core::mem::size_of::<A::Symbol>();

        sa_size + text_size + c_table_size + symbols_size + self.occ.size_bytes()
    }

    /// Compression ratio: index_size / original_size
    pub fn compression_ratio(&self) -> f64 {
        let text_len = self.text_len();
        if text_len == 0 {
            return 0.0;
        }
        self.size_bytes() as f64 / text_len as f64
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            text_len: self.text_len(),
            alphabet_size: self.alphabet_size(),
            size_bytes: self.size_bytes(),
            compression_ratio: self.compression_ratio(),
            suffix_sort: self.config.suffix_sort,
            rank: self.config.rank,
        }
    }
}

/// Build summary of an index.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexStats {
    pub text_len: usize,
    /// Distinct symbols including the sentinel
    pub alphabet_size: usize,
    pub size_bytes: usize,
    pub compression_ratio: f64,
    pub suffix_sort: SuffixSort,
    pub rank: RankStrategy,
}

/// Iterator over occurrence offsets, in suffix-array order.
#[derive(Clone, Debug)]
pub struct Locate<'a> {
    rows: core::slice::Iter<'a, usize>,
}

impl Iterator for Locate<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.rows.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl DoubleEndedIterator for Locate<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.rows.next_back().copied()
    }
}

impl ExactSizeIterator for Locate<'_> {}
