//! Error types
//!
//! "Not found" is not an error: an absent pattern yields an empty range,
//! a zero count and an empty locate result.

/// Errors raised while building or querying an [`FmIndex`](crate::FmIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The raw text already contains the reserved sentinel symbol.
    #[error("invalid input: sentinel collision at offset {position}")]
    SentinelCollision { position: usize },

    /// Patterns must contain at least one symbol.
    #[error("invalid pattern: empty pattern")]
    EmptyPattern,

    /// The sentinel is internal bookkeeping and cannot be searched for.
    #[error("invalid pattern: sentinel symbol at offset {position}")]
    SentinelInPattern { position: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = Error::SentinelCollision { position: 3 };
        assert_eq!(
            err.to_string(),
            "invalid input: sentinel collision at offset 3"
        );
        assert_eq!(Error::EmptyPattern.to_string(), "invalid pattern: empty pattern");
    }
}
