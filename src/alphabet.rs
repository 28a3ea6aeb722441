//! Symbol order
//!
//! The index never hard-codes a character set. An [`Alphabet`] names the
//! reserved sentinel and the total order over every other symbol; the
//! sentinel always sorts first regardless of that order.
//!
//! Internally each distinct symbol is mapped to a dense code:
//! code `0` is the sentinel, codes `1..σ` follow the alphabet order.

extern crate alloc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

/// Total order over the symbols of a text, plus its reserved sentinel.
pub trait Alphabet {
    type Symbol: Copy + Eq + Debug;

    /// The terminator appended to every text. Must not occur in raw input.
    fn sentinel(&self) -> Self::Symbol;

    /// Order over non-sentinel symbols. Must be total and agree with `Eq`.
    fn compare(&self, a: &Self::Symbol, b: &Self::Symbol) -> Ordering;
}

/// Byte strings in natural byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bytes {
    sentinel: u8,
}

impl Bytes {
    pub const fn new(sentinel: u8) -> Self {
        Self { sentinel }
    }
}

impl Default for Bytes {
    fn default() -> Self {
        Self::new(b'$')
    }
}

impl Alphabet for Bytes {
    type Symbol = u8;

    #[inline]
    fn sentinel(&self) -> u8 {
        self.sentinel
    }

    #[inline]
    fn compare(&self, a: &u8, b: &u8) -> Ordering {
        a.cmp(b)
    }
}

/// Unicode scalar values in code point order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chars {
    sentinel: char,
}

impl Chars {
    pub const fn new(sentinel: char) -> Self {
        Self { sentinel }
    }
}

impl Default for Chars {
    fn default() -> Self {
        Self::new('$')
    }
}

impl Alphabet for Chars {
    type Symbol = char;

    #[inline]
    fn sentinel(&self) -> char {
        self.sentinel
    }

    #[inline]
    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.cmp(b)
    }
}

/// Dense code assignment for the symbols that occur in one text.
#[derive(Clone, Debug)]
pub struct SymbolTable<S> {
    /// `symbols[code]`; slot 0 holds the sentinel.
    symbols: Vec<S>,
}

impl<S: Copy + Eq + Debug> SymbolTable<S> {
    /// Collect the distinct symbols of `raw` (which must be sentinel-free).
    pub fn from_text<A>(raw: &[S], alphabet: &A) -> Self
    where
        A: Alphabet<Symbol = S>,
    {
        Self::encode_text(raw, alphabet).0
    }

    /// Build the table and code `raw` in one pass over its sorted offsets.
    ///
    /// Symbols that `compare` ranks equal share one code, so every raw
    /// symbol gets a code even when the order is coarser than `Eq`.
    /// The returned codes carry no sentinel.
    pub fn encode_text<A>(raw: &[S], alphabet: &A) -> (Self, Vec<u32>)
    where
        A: Alphabet<Symbol = S>,
    {
        let mut order: Vec<usize> = (0..raw.len()).collect();
        order.sort_unstable_by(|&a, &b| alphabet.compare(&raw[a], &raw[b]));

        let mut symbols = Vec::with_capacity(raw.len().min(256) + 1);
        symbols.push(alphabet.sentinel());
        let mut codes = alloc::vec![0u32; raw.len()];

        for (w, &i) in order.iter().enumerate() {
            let starts_group = w == 0
                || alphabet.compare(&raw[order[w - 1]], &raw[i]) != Ordering::Equal;
            if starts_group {
                symbols.push(raw[i]);
            }
            codes[i] = (symbols.len() - 1) as u32;
        }

        (Self { symbols }, codes)
    }

    /// Code of `symbol`, or `None` if it never occurs in the text.
    #[inline]
    pub fn encode<A>(&self, alphabet: &A, symbol: &S) -> Option<u32>
    where
        A: Alphabet<Symbol = S>,
    {
        if *symbol == self.symbols[0] {
            return Some(0);
        }
        self.symbols[1..]
            .binary_search_by(|known| alphabet.compare(known, symbol))
            .ok()
            .map(|i| (i + 1) as u32)
    }

    #[inline]
    pub fn decode(&self, code: u32) -> S {
        self.symbols[code as usize]
    }

    /// Number of distinct symbols including the sentinel (σ).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: the sentinel is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in code order, sentinel first.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }
}
