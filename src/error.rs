//! Error types shared by the input reader and the calculators.

use thiserror::Error;

/// A per-case failure. The run reports it and moves on to the next case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("No numbers left after removal")]
    NoData,
    #[error("No prices given")]
    EmptyPrices,
}

/// A failure to frame the input stream. Once raised, no further cases can be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed integer {token:?} at token {position}")]
    Malformed { token: String, position: usize },

    #[error("negative count {count} at token {position}")]
    NegativeCount { count: i64, position: usize },

    #[error("input ended after {received} of {declared} values")]
    Truncated { declared: usize, received: usize },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
