//! Burrows-Wheeler Transform (BWT)
//!
//! The foundation of FM-Index. BWT rearranges text to group similar symbols,
//! enabling both compression and fast search.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::text::SENTINEL_CODE;

/// Build BWT from coded text and suffix array
/// BWT[i] = text[SA[i] - 1], wrapping to text[n - 1] (the sentinel) when SA[i] == 0
#[inline]
pub fn build_bwt(text: &[u32], sa: &[usize]) -> Vec<u32> {
    let n = text.len();
    let mut bwt = Vec::with_capacity(sa.len());

    for &idx in sa {
        if idx == 0 {
            bwt.push(text[n - 1]);
        } else {
            bwt.push(text[idx - 1]);
        }
    }

    bwt
}

/// C-Table: C[c] = count of symbols strictly smaller than c
/// Used for LF-mapping in backward search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CTable {
    /// σ + 1 entries; the last one is the text length.
    starts: Vec<usize>,
}

impl CTable {
    /// `sigma` is the number of distinct codes, sentinel included.
    pub fn build(text: &[u32], sigma: usize) -> Self {
        let mut counts = vec![0usize; sigma];
        for &c in text {
            counts[c as usize] += 1;
        }

        // Cumulative sum: C[c] = sum of counts[0..c]
        let mut starts = Vec::with_capacity(sigma + 1);
        let mut sum = 0;
        for count in counts {
            starts.push(sum);
            sum += count;
        }
        starts.push(sum);

        Self { starts }
    }

    /// First SA row whose suffix starts with `code`.
    #[inline(always)]
    pub fn get(&self, code: u32) -> usize {
        self.starts[code as usize]
    }

    /// Number of occurrences of `code` in the text.
    #[inline]
    pub fn count(&self, code: u32) -> usize {
        self.starts[code as usize + 1] - self.starts[code as usize]
    }

    /// Number of codes (σ).
    #[inline]
    pub fn sigma(&self) -> usize {
        self.starts.len() - 1
    }

    /// Text length including the sentinel.
    #[inline]
    pub fn total(&self) -> usize {
        self.starts[self.starts.len() - 1]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.starts[..self.sigma()]
    }
}

/// Recover the raw text (sentinel dropped) from a BWT by walking LF from row 0.
///
/// Standalone: derives the LF mapping by counting, without a rank structure.
pub fn invert_bwt(bwt: &[u32], c_table: &CTable) -> Vec<u32> {
    let n = bwt.len();
    if n <= 1 {
        return Vec::new();
    }

    let mut next_row: Vec<usize> = c_table.starts[..c_table.sigma()].to_vec();
    let mut lf = vec![0usize; n];
    for (i, &c) in bwt.iter().enumerate() {
        lf[i] = next_row[c as usize];
        next_row[c as usize] += 1;
    }

    // Row 0 is the sentinel suffix; its BWT symbol is the last raw symbol
    let mut raw = vec![SENTINEL_CODE; n - 1];
    let mut row = 0;
    for slot in raw.iter_mut().rev() {
        *slot = bwt[row];
        row = lf[row];
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Bytes;
    use crate::suffix_array::build_naive;
    use crate::text::Text;

    fn banana() -> (Vec<u32>, Vec<usize>) {
        let text = Text::new(b"banana", &Bytes::default()).unwrap();
        let codes = text.codes().to_vec();
        let sa = build_naive(&codes);
        (codes, sa)
    }

    #[test]
    fn test_bwt() {
        let (text, sa) = banana();
        let bwt = build_bwt(&text, &sa);

        // SA = [6,5,3,1,0,4,2] -> preceding symbols "annb$aa"
        // $=0 a=1 b=2 n=3
        assert_eq!(bwt, vec![1, 3, 3, 2, 0, 1, 1]);
    }

    #[test]
    fn test_bwt_wraps_to_sentinel() {
        let (text, sa) = banana();
        let bwt = build_bwt(&text, &sa);

        let row = sa.iter().position(|&p| p == 0).unwrap();
        assert_eq!(bwt[row], SENTINEL_CODE);
        assert_eq!(bwt.iter().filter(|&&c| c == SENTINEL_CODE).count(), 1);
    }

    #[test]
    fn test_c_table() {
        let (text, _) = banana();
        let c_table = CTable::build(&text, 4);

        // One sentinel, three 'a', one 'b', two 'n'
        assert_eq!(c_table.as_slice(), &[0, 1, 4, 5]);
        assert_eq!(c_table.count(1), 3);
        assert_eq!(c_table.sigma(), 4);
        assert_eq!(c_table.total(), 7);
    }

    #[test]
    fn test_invert_bwt() {
        let (text, sa) = banana();
        let bwt = build_bwt(&text, &sa);
        let c_table = CTable::build(&text, 4);

        assert_eq!(invert_bwt(&bwt, &c_table), text[..6].to_vec());
    }

    #[test]
    fn test_invert_sentinel_only() {
        let c_table = CTable::build(&[SENTINEL_CODE], 1);
        assert!(invert_bwt(&[SENTINEL_CODE], &c_table).is_empty());
    }
}
