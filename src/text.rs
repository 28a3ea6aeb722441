//! Sentinel preprocessing
//!
//! Turns raw input into the sentineled, densely coded text every later
//! stage operates on.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::alphabet::{Alphabet, SymbolTable};
use crate::error::{Error, Result};

/// Code of the sentinel in every coded text.
pub const SENTINEL_CODE: u32 = 0;

/// Raw text plus terminator, stored as dense codes.
#[derive(Clone, Debug)]
pub struct Text<S> {
    symbols: SymbolTable<S>,
    /// Codes of raw text followed by `SENTINEL_CODE`.
    codes: Vec<u32>,
}

impl<S: Copy + Eq + Debug> Text<S> {
    /// Validate `raw` and append the sentinel.
    ///
    /// Fails with [`Error::SentinelCollision`] if `raw` already contains the
    /// alphabet's sentinel. Empty input is valid and yields a text holding
    /// only the sentinel.
    pub fn new<A>(raw: &[S], alphabet: &A) -> Result<Self>
    where
        A: Alphabet<Symbol = S>,
    {
        let sentinel = alphabet.sentinel();
        if let Some(position) = raw.iter().position(|&s| s == sentinel) {
            return Err(Error::SentinelCollision { position });
        }

        let (symbols, mut codes) = SymbolTable::encode_text(raw, alphabet);
        codes.push(SENTINEL_CODE);

        Ok(Self { symbols, codes })
    }

    /// Coded text including the trailing sentinel.
    #[inline]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable<S> {
        &self.symbols
    }

    /// Length including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Never true: the sentinel is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Give up the text, keeping only the symbol table.
    pub fn into_parts(self) -> (SymbolTable<S>, Vec<u32>) {
        (self.symbols, self.codes)
    }
}
