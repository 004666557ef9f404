//! Error types for signal matching.

use std::fmt;

/// Identifies which of the two matched signals an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSide {
    /// The first signal (rows of the accumulated distance matrix).
    X,
    /// The second signal (columns of the accumulated distance matrix).
    Y,
}

impl fmt::Display for SignalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Coarse classification of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The projected accumulated distance matrix would not fit the memory ceiling.
    ResourceLimitExceeded,
    /// A result accessor was called before a successful `compute()`.
    InvalidState,
    /// The input signals cannot be matched.
    InvalidInput,
}

/// Errors from signal matching and result access.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Returned when a signal has no frames.
    #[error("signal {side} has no frames")]
    EmptySignal {
        /// The offending signal.
        side: SignalSide,
    },

    /// Returned when a signal contains NaN, infinity, or negative infinity.
    #[error("signal {side} contains non-finite frame at index {index}")]
    NonFiniteFrame {
        /// The offending signal.
        side: SignalSide,
        /// Position of the first non-finite frame found.
        index: usize,
    },

    /// Returned when the accumulated distance is not finite: the warping
    /// window admits no path to the final cell, or the frame magnitudes
    /// overflow `f64`.
    #[error("accumulated distance between {n} and {m} frames is not finite")]
    NonFiniteDistance {
        /// Number of frames in signal x.
        n: usize,
        /// Number of frames in signal y.
        m: usize,
    },

    /// Returned when the accumulated distance matrix would exceed the configured ceiling.
    #[error(
        "matching {n} x {m} frames needs {required_bytes} bytes, exceeding the limit of {limit_bytes} bytes"
    )]
    ResourceLimitExceeded {
        /// Number of frames in signal x.
        n: usize,
        /// Number of frames in signal y.
        m: usize,
        /// Projected matrix footprint, saturated at `u64::MAX` on overflow.
        required_bytes: u64,
        /// Configured memory ceiling.
        limit_bytes: u64,
    },

    /// Returned when a result is requested before `compute()` has succeeded.
    #[error("no match has been computed yet")]
    NotComputed,
}

impl MatchError {
    /// Return the coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySignal { .. }
            | Self::NonFiniteFrame { .. }
            | Self::NonFiniteDistance { .. } => ErrorKind::InvalidInput,
            Self::ResourceLimitExceeded { .. } => ErrorKind::ResourceLimitExceeded,
            Self::NotComputed => ErrorKind::InvalidState,
        }
    }
}
