//! Dynamic time warping signal matcher.
//!
//! Pure math library, zero I/O. Computes the accumulated absolute-difference
//! distance between two sampled signals, reconstructs the optimal alignment
//! path with a fixed diagonal > above > left tie-break, and warps both
//! signals onto that path so they become frame-for-frame comparable.

mod config;
mod distance;
mod error;
mod matcher;
mod matrix;
mod path;
mod result;
mod signal;
mod window;

pub use config::{DEFAULT_MEMORY_LIMIT_BYTES, MatcherConfig};
pub use distance::MatchDistance;
pub use error::{ErrorKind, MatchError, SignalSide};
pub use matcher::{Matcher, match_buffers};
pub use matrix::AccumulatedDistanceMatrix;
pub use path::{AlignedPair, AlignmentPath};
pub use result::MatchResult;
pub use signal::{Signal, SignalBuffer, SignalMut, SignalSlice};
pub use window::WarpingWindow;
