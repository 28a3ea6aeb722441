//! Occurrence (rank) structures over the BWT
//!
//! Every strategy answers the same question, `Rank(c, k)` = occurrences of
//! code `c` in `BWT[0..k)` for `k` in `0..=N`, and trades memory for lookup
//! cost differently. Builders keep their running counters local; the
//! finished structures are immutable.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::config::RankStrategy;
use crate::wavelet::WaveletMatrix;

/// Rank/access over a coded BWT.
pub trait Occurrences {
    /// Occurrences of `code` in `BWT[0..k)`. `k` may equal `len()`.
    fn rank(&self, code: u32, k: usize) -> usize;

    /// `BWT[i]`.
    fn symbol_at(&self, i: usize) -> u32;

    /// BWT length.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Heap bytes held.
    fn size_bytes(&self) -> usize;

    /// Total occurrences of `code`.
    #[inline]
    fn occ(&self, code: u32) -> usize {
        self.rank(code, self.len())
    }
}

/// Eager σ × (N + 1) table. O(1) rank.
#[derive(Clone, Debug)]
pub struct FullRank {
    /// Row-major: `table[code * (n + 1) + k]`
    table: Vec<usize>,
    bwt: Vec<u32>,
}

impl FullRank {
    pub fn build(bwt: &[u32], sigma: usize) -> Self {
        let stride = bwt.len() + 1;
        let mut table = vec![0usize; sigma * stride];
        let mut counts = vec![0usize; sigma];

        // table[c][k] is the count before consuming position k
        for k in 0..=bwt.len() {
            for (c, &count) in counts.iter().enumerate() {
                table[c * stride + k] = count;
            }
            if let Some(&c) = bwt.get(k) {
                counts[c as usize] += 1;
            }
        }

        Self {
            table,
            bwt: bwt.to_vec(),
        }
    }
}

impl Occurrences for FullRank {
    #[inline(always)]
    fn rank(&self, code: u32, k: usize) -> usize {
        let stride = self.bwt.len() + 1;
        self.table[code as usize * stride + k.min(self.bwt.len())]
    }

    #[inline]
    fn symbol_at(&self, i: usize) -> u32 {
        self.bwt[i]
    }

    #[inline]
    fn len(&self) -> usize {
        self.bwt.len()
    }

    fn size_bytes(&self) -> usize {
        self.table.len() * core::mem::size_of::<usize>()
            + self.bwt.len() * core::mem::size_of::<u32>()
    }
}

/// Exact ranks checkpointed every `step` positions; the rest is scanned.
#[derive(Clone, Debug)]
pub struct SampledRank {
    step: usize,
    sigma: usize,
    /// `checkpoints[b * sigma + c]` = Rank(c, b * step)
    checkpoints: Vec<usize>,
    bwt: Vec<u32>,
}

impl SampledRank {
    /// `step` of zero is treated as one.
    pub fn build(bwt: &[u32], sigma: usize, step: usize) -> Self {
        let step = step.max(1);
        let mut checkpoints = Vec::with_capacity((bwt.len() / step + 1) * sigma);
        let mut counts = vec![0usize; sigma];

        for k in 0..=bwt.len() {
            if k % step == 0 {
                checkpoints.extend_from_slice(&counts);
            }
            if let Some(&c) = bwt.get(k) {
                counts[c as usize] += 1;
            }
        }

        Self {
            step,
            sigma,
            checkpoints,
            bwt: bwt.to_vec(),
        }
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Occurrences for SampledRank {
    #[inline]
    fn rank(&self, code: u32, k: usize) -> usize {
        let k = k.min(self.bwt.len());
        let block = k / self.step;
        let base = self.checkpoints[block * self.sigma + code as usize];

        base + self.bwt[block * self.step..k]
            .iter()
            .filter(|&&c| c == code)
            .count()
    }

    #[inline]
    fn symbol_at(&self, i: usize) -> u32 {
        self.bwt[i]
    }

    #[inline]
    fn len(&self) -> usize {
        self.bwt.len()
    }

    fn size_bytes(&self) -> usize {
        self.checkpoints.len() * core::mem::size_of::<usize>()
            + self.bwt.len() * core::mem::size_of::<u32>()
    }
}

impl Occurrences for WaveletMatrix {
    #[inline]
    fn rank(&self, code: u32, k: usize) -> usize {
        WaveletMatrix::rank(self, code, k)
    }

    #[inline]
    fn symbol_at(&self, i: usize) -> u32 {
        self.get(i)
    }

    #[inline]
    fn len(&self) -> usize {
        WaveletMatrix::len(self)
    }

    fn size_bytes(&self) -> usize {
        WaveletMatrix::size_bytes(self)
    }
}

/// The rank structure an index was built with.
#[derive(Clone, Debug)]
pub enum RankStructure {
    Full(FullRank),
    Sampled(SampledRank),
    Wavelet(WaveletMatrix),
}

impl RankStructure {
    pub fn build(bwt: &[u32], sigma: usize, strategy: RankStrategy) -> Self {
        match strategy {
            RankStrategy::Full => Self::Full(FullRank::build(bwt, sigma)),
            RankStrategy::Sampled { step } => Self::Sampled(SampledRank::build(bwt, sigma, step)),
            RankStrategy::Wavelet => Self::Wavelet(WaveletMatrix::build(bwt, sigma)),
        }
    }

    /// The strategy this structure implements (sampling step normalized).
    pub fn strategy(&self) -> RankStrategy {
        match self {
            Self::Full(_) => RankStrategy::Full,
            Self::Sampled(s) => RankStrategy::Sampled { step: s.step() },
            Self::Wavelet(_) => RankStrategy::Wavelet,
        }
    }
}

impl Occurrences for RankStructure {
    #[inline(always)]
    fn rank(&self, code: u32, k: usize) -> usize {
        match self {
            Self::Full(r) => r.rank(code, k),
            Self::Sampled(r) => r.rank(code, k),
            Self::Wavelet(r) => Occurrences::rank(r, code, k),
        }
    }

    #[inline]
    fn symbol_at(&self, i: usize) -> u32 {
        match self {
            Self::Full(r) => r.symbol_at(i),
            Self::Sampled(r) => r.symbol_at(i),
            Self::Wavelet(r) => r.symbol_at(i),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Self::Full(r) => r.len(),
            Self::Sampled(r) => r.len(),
            Self::Wavelet(r) => Occurrences::len(r),
        }
    }

    fn size_bytes(&self) -> usize {
        match self {
            Self::Full(r) => r.size_bytes(),
            Self::Sampled(r) => r.size_bytes(),
            Self::Wavelet(r) => Occurrences::size_bytes(r),
        }
    }
}
