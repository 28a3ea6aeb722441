//! Succinct BitVector with constant-time rank
//!
//! **Interleaved Memory Layout**: [RankHeader(u64) | Body(8 x u64)]
//! A rank query touches one header and at most eight body words, all in
//! the same 72-byte stride.

extern crate alloc;
use alloc::vec::Vec;

/// 512 bits of body + 64 bits of header = 576 bits per block
const BLOCK_BITS: usize = 512;
const WORDS_PER_BLOCK: usize = 8;
const BLOCK_STRIDE: usize = WORDS_PER_BLOCK + 1;

#[derive(Clone, Debug, Default)]
pub struct BitVector {
    /// Interleaved data: [Rank0, Word0..7, Rank1, Word8..15, ...]
    data: Vec<u64>,
    len: usize,
    /// Total number of set bits, valid after `build_index`.
    ones: usize,
}

impl BitVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        let blocks = bits.div_ceil(BLOCK_BITS);
        Self {
            data: Vec::with_capacity(blocks * BLOCK_STRIDE),
            len: 0,
            ones: 0,
        }
    }

    /// Append a bit. Headers are placeholders until `build_index`.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let bit_idx = self.len % BLOCK_BITS;

        if bit_idx == 0 {
            // Header + full body, so body indices never need a bounds check
            self.data.resize(self.data.len() + BLOCK_STRIDE, 0);
        }

        if bit {
            let base = (self.len / BLOCK_BITS) * BLOCK_STRIDE;
            self.data[base + 1 + bit_idx / 64] |= 1 << (bit_idx % 64);
        }

        self.len += 1;
    }

    /// Write the cumulative rank headers. Call once after the last push.
    pub fn build_index(&mut self) {
        let mut sum = 0usize;

        for block in self.data.chunks_exact_mut(BLOCK_STRIDE) {
            block[0] = sum as u64;
            sum += block[1..]
                .iter()
                .map(|w| w.count_ones() as usize)
                .sum::<usize>();
        }

        self.ones = sum;
    }

    /// Bit at index `i`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> bool {
        let offset = i % BLOCK_BITS;
        let idx = (i / BLOCK_BITS) * BLOCK_STRIDE + 1 + offset / 64;
        (self.data[idx] >> (offset % 64)) & 1 != 0
    }

    /// Rank1(i): count 1s in [0..i)
    #[inline(always)]
    pub fn rank1(&self, i: usize) -> usize {
        if i >= self.len {
            return self.ones;
        }

        let base = (i / BLOCK_BITS) * BLOCK_STRIDE;
        let offset = i % BLOCK_BITS;
        let word_idx = offset / 64;
        let bit_idx = offset % 64;

        let mut r = self.data[base] as usize;
        for w in 0..word_idx {
            r += self.data[base + 1 + w].count_ones() as usize;
        }
        if bit_idx > 0 {
            let mask = (1u64 << bit_idx) - 1;
            r += (self.data[base + 1 + word_idx] & mask).count_ones() as usize;
        }

        r
    }

    /// Rank0(i): count 0s in [0..i)
    #[inline(always)]
    pub fn rank0(&self, i: usize) -> usize {
        i.min(self.len) - self.rank1(i)
    }

    #[inline(always)]
    pub fn rank(&self, bit: bool, i: usize) -> usize {
        if bit {
            self.rank1(i)
        } else {
            self.rank0(i)
        }
    }

    /// Number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Heap bytes held by the vector.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * core::mem::size_of::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: &[bool]) -> BitVector {
        let mut bv = BitVector::new();
        for &b in bits {
            bv.push(b);
        }
        bv.build_index();
        bv
    }

    #[test]
    fn test_rank_small() {
        // 1 0 1 1 0 1
        let bv = from_bits(&[true, false, true, true, false, true]);

        assert_eq!(bv.rank1(0), 0);
        assert_eq!(bv.rank1(1), 1);
        assert_eq!(bv.rank1(2), 1);
        assert_eq!(bv.rank1(4), 3);
        assert_eq!(bv.rank1(6), 4);
        assert_eq!(bv.rank0(2), 1);
        assert_eq!(bv.rank0(6), 2);
        assert!(bv.get(0));
        assert!(!bv.get(4));
    }

    #[test]
    fn test_across_blocks() {
        let bits: Vec<bool> = (0..1024).map(|i| i % 3 == 0).collect();
        let bv = from_bits(&bits);

        // 0, 3, ..., 510 -> 171 ones
        assert_eq!(bv.rank1(512), 171);
        assert_eq!(bv.rank1(1024), 342);
        assert_eq!(bv.count_ones(), 342);

        for i in [0, 63, 64, 65, 511, 513, 700, 1023] {
            let expected = bits[..i].iter().filter(|&&b| b).count();
            assert_eq!(bv.rank1(i), expected, "rank1({})", i);
        }
    }

    #[test]
    fn test_layout() {
        let bits: Vec<bool> = (0..512).map(|i| i % 2 == 0).collect();
        let bv = from_bits(&bits);

        // One block: header + 8 body words
        assert_eq!(bv.data.len(), BLOCK_STRIDE);
        assert_eq!(bv.data[0], 0);
        assert_eq!(bv.rank1(512), 256);
    }

    #[test]
    fn test_empty() {
        let bv = from_bits(&[]);
        assert!(bv.is_empty());
        assert_eq!(bv.rank1(0), 0);
        assert_eq!(bv.rank0(0), 0);
    }
}
