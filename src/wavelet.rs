//! Wavelet Matrix over dense symbol codes
//!
//! One bit layer per code bit, most significant first. Built with two
//! ping-pong buffers reused across layers.
//!
//! Space: N bits + 12.5% overhead per layer.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::bitvec::BitVector;

#[derive(Clone, Debug)]
pub struct WaveletMatrix {
    /// `layers[d]` holds bit `d` of each code in that layer's order.
    layers: Vec<BitVector>,
    /// Number of zeros in each layer, used for routing
    zeros: Vec<usize>,
    len: usize,
}

/// Bits needed to represent codes `0..sigma`, at least one.
#[inline]
pub fn bits_for(sigma: usize) -> usize {
    let max_code = sigma.saturating_sub(1);
    (usize::BITS - max_code.leading_zeros()).max(1) as usize
}

impl WaveletMatrix {
    /// Build over `codes`, every code below `sigma`.
    pub fn build(codes: &[u32], sigma: usize) -> Self {
        let n = codes.len();
        let depth = bits_for(sigma);
        let mut layers: Vec<BitVector> = (0..depth).map(|_| BitVector::with_capacity(n)).collect();
        let mut zeros = vec![0usize; depth];

        let mut current = codes.to_vec();
        let mut next = vec![0u32; n];

        for d in (0..depth).rev() {
            let layer = &mut layers[d];
            let mask = 1u32 << d;

            let zero_count = current.iter().filter(|&&c| c & mask == 0).count();
            zeros[d] = zero_count;

            // Stable partition: zeros keep their order, then ones
            let mut z_ptr = 0;
            let mut o_ptr = zero_count;
            for &c in &current {
                let bit = c & mask != 0;
                layer.push(bit);

                if bit {
                    next[o_ptr] = c;
                    o_ptr += 1;
                } else {
                    next[z_ptr] = c;
                    z_ptr += 1;
                }
            }
            layer.build_index();

            core::mem::swap(&mut current, &mut next);
        }

        Self { layers, zeros, len: n }
    }

    /// Code at position i. O(log σ).
    #[inline]
    pub fn get(&self, mut i: usize) -> u32 {
        let mut c = 0u32;

        for d in (0..self.layers.len()).rev() {
            let layer = &self.layers[d];
            let bit = layer.get(i);
            if bit {
                c |= 1 << d;
                i = self.zeros[d] + layer.rank1(i);
            } else {
                i = layer.rank0(i);
            }
        }
        c
    }

    /// Rank(c, i): occurrences of code c in [0..i). O(log σ).
    #[inline]
    pub fn rank(&self, c: u32, i: usize) -> usize {
        let mut start = 0;
        let mut end = i.min(self.len);

        for d in (0..self.layers.len()).rev() {
            let layer = &self.layers[d];
            let bit = (c >> d) & 1 != 0;

            let rank_start = layer.rank(bit, start);
            let rank_end = layer.rank(bit, end);

            if bit {
                start = self.zeros[d] + rank_start;
                end = self.zeros[d] + rank_end;
            } else {
                start = rank_start;
                end = rank_end;
            }
        }

        end - start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size_bytes(&self) -> usize {
        self.layers.iter().map(BitVector::size_bytes).sum::<usize>()
            + self.zeros.len() * core::mem::size_of::<usize>()
    }
}
