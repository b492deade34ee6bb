use std::fmt;

/// Which of the two point sets a boundary array partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Source,
    Query,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "ptr_x"),
            Side::Query => write!(f, "ptr_y"),
        }
    }
}

/// The first invariant a pair of batch pointer arrays failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryViolation {
    #[error("ptr_x has {source_len} entries but ptr_y has {query_len}")]
    LengthMismatch { source_len: usize, query_len: usize },
    #[error("pointer arrays must hold at least one entry")]
    Empty,
    #[error("{side}[0] = {value} (expected 0)")]
    NonZeroStart { side: Side, value: usize },
    #[error("{side} ends at {value} but the point set holds {expected} points")]
    EndMismatch { side: Side, value: usize, expected: usize },
    #[error("{side} decreases at position {position}")]
    Decreasing { side: Side, position: usize },
    #[error("{side} holds negative offset {value} at position {position}")]
    Negative { side: Side, position: usize, value: i64 },
}

/// Errors returned by radius graph construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RadiusError {
    #[error("invalid batch boundaries: {0}")]
    InvalidBoundaries(#[from] BoundaryViolation),
    #[error("buffer of length {len} is not a whole number of {dim}-dimensional points")]
    InvalidShape { len: usize, dim: usize },
    #[error("source points have {source_dim} features but query points have {query_dim}")]
    DimensionMismatch { source_dim: usize, query_dim: usize },
}

pub type Result<T> = std::result::Result<T, RadiusError>;
