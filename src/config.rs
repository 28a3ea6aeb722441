//! Build configuration

/// Suffix array construction algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuffixSort {
    /// Comparison sort over whole suffixes. O(N² log N) worst case.
    Naive,
    /// Manber-Myers rank doubling. O(N log² N).
    #[default]
    PrefixDoubling,
}

/// Occurrence (rank) structure layout.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankStrategy {
    /// Eager σ × (N + 1) table. O(1) rank, heaviest memory.
    #[default]
    Full,
    /// Exact ranks every `step` positions, remainder scanned. O(step) rank.
    Sampled { step: usize },
    /// Wavelet matrix over the BWT. O(log σ) rank, ~N log σ bits.
    Wavelet,
}

/// How an [`FmIndex`](crate::FmIndex) is built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexConfig {
    pub suffix_sort: SuffixSort,
    pub rank: RankStrategy,
}

impl IndexConfig {
    pub fn with_suffix_sort(mut self, suffix_sort: SuffixSort) -> Self {
        self.suffix_sort = suffix_sort;
        self
    }

    pub fn with_rank(mut self, rank: RankStrategy) -> Self {
        self.rank = rank;
        self
    }
}
