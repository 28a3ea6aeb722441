//! Suffix Array construction
//!
//! Input is a coded text whose last code is the unique, smallest sentinel,
//! so no two suffixes compare equal and every comparison terminates.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::config::SuffixSort;

/// Sorts above this size go through rayon when the `parallel` feature is on.
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// Build the suffix array of `text` (sentinel included).
pub fn build_suffix_array(text: &[u32], strategy: SuffixSort) -> Vec<usize> {
    match strategy {
        SuffixSort::Naive => build_naive(text),
        SuffixSort::PrefixDoubling => build_prefix_doubling(text),
    }
}

/// Sort offsets by direct suffix comparison.
/// O(N² log N) worst case (highly repetitive text), fine for small inputs.
pub fn build_naive(text: &[u32]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sort_by(&mut sa, |&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Manber-Myers prefix doubling. O(N log² N).
///
/// After the round with offset `k`, `rank[i]` orders suffix `i` by its first
/// `2k` symbols. Stops as soon as every rank is distinct.
pub fn build_prefix_doubling(text: &[u32]) -> Vec<usize> {
    let n = text.len();
    let mut sa: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return sa;
    }

    let mut rank: Vec<usize> = text.iter().map(|&c| c as usize).collect();
    let mut next = vec![0usize; n];
    let mut k = 1;

    loop {
        // Missing second half sorts before any present one
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

        sort_by(&mut sa, |&a, &b| key(a).cmp(&key(b)));

        next[sa[0]] = 0;
        for w in 1..n {
            let (prev, curr) = (sa[w - 1], sa[w]);
            next[curr] = next[prev] + usize::from(key(prev) != key(curr));
        }
        core::mem::swap(&mut rank, &mut next);

        if rank[sa[n - 1]] == n - 1 || k >= n {
            break;
        }
        k *= 2;
    }

    sa
}

#[cfg(feature = "parallel")]
#[inline]
fn sort_by<F>(sa: &mut [usize], compare: F)
where
    F: Fn(&usize, &usize) -> Ordering + Sync,
{
    use rayon::prelude::*;

    if sa.len() > PARALLEL_THRESHOLD {
        sa.par_sort_unstable_by(compare);
    } else {
        sa.sort_unstable_by(compare);
    }
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn sort_by<F>(sa: &mut [usize], compare: F)
where
    F: Fn(&usize, &usize) -> Ordering,
{
    sa.sort_unstable_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Bytes;
    use crate::text::Text;

    fn coded(raw: &[u8]) -> Vec<u32> {
        Text::new(raw, &Bytes::default()).unwrap().codes().to_vec()
    }

    #[test]
    fn test_banana() {
        let text = coded(b"banana");

        // 6: $
        // 5: a$
        // 3: ana$
        // 1: anana$
        // 0: banana$
        // 4: na$
        // 2: nana$
        assert_eq!(build_naive(&text), vec![6, 5, 3, 1, 0, 4, 2]);
        assert_eq!(build_prefix_doubling(&text), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_repetitive() {
        let text = coded(b"aaaaa");
        assert_eq!(build_prefix_doubling(&text), vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(build_naive(&text), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_minimal() {
        assert_eq!(build_prefix_doubling(&coded(b"")), vec![0]);
        assert_eq!(build_naive(&coded(b"")), vec![0]);
        assert_eq!(build_prefix_doubling(&coded(b"a")), vec![1, 0]);
    }

    #[test]
    fn test_strategies_agree() {
        let text = coded(b"mississippi river mississippi delta");
        let naive = build_suffix_array(&text, SuffixSort::Naive);
        let doubling = build_suffix_array(&text, SuffixSort::PrefixDoubling);
        assert_eq!(naive, doubling);

        // Sentinel suffix always first
        assert_eq!(naive[0], text.len() - 1);
        for w in naive.windows(2) {
            assert!(text[w[0]..] < text[w[1]..]);
        }
    }

    #[test]
    fn test_large_repetitive() {
        let mut raw = Vec::new();
        for _ in 0..300 {
            raw.extend_from_slice(b"abcab");
        }
        let text = coded(&raw);
        assert_eq!(build_naive(&text), build_prefix_doubling(&text));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_large() {
        // Pseudo-random DNA, long enough to take the rayon path
        let mut state = 0x2545_f491_u32;
        let raw: Vec<u8> = (0..150_000)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                b"acgt"[(state >> 30) as usize]
            })
            .collect();
        let text = coded(&raw);
        assert!(text.len() > PARALLEL_THRESHOLD);

        let doubling = build_prefix_doubling(&text);
        assert_eq!(doubling[0], text.len() - 1);
        for w in doubling.windows(2) {
            assert!(text[w[0]..] < text[w[1]..]);
        }
        assert_eq!(build_naive(&text), doubling);

        let index = crate::FmIndex::build(&raw).unwrap();
        let pattern = &raw[70_000..70_012];
        let expected: Vec<usize> = (0..=raw.len() - pattern.len())
            .filter(|&i| &raw[i..i + pattern.len()] == pattern)
            .collect();
        assert!(expected.contains(&70_000));
        assert_eq!(index.locate_all(pattern).unwrap(), expected);
    }
}
