//! Match result and signal warping.

use tracing::debug;

use crate::distance::MatchDistance;
use crate::path::AlignmentPath;
use crate::signal::{Signal, SignalBuffer, SignalMut};

/// Outcome of one `compute()`: the accumulated distance and the optimal path.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchResult {
    distance: MatchDistance,
    path: AlignmentPath,
}

impl MatchResult {
    pub(crate) fn new(distance: MatchDistance, path: AlignmentPath) -> Self {
        Self { distance, path }
    }

    /// Return the accumulated distance.
    #[must_use]
    pub fn distance(&self) -> MatchDistance {
        self.distance
    }

    /// Return the alignment path.
    #[must_use]
    pub fn path(&self) -> &AlignmentPath {
        &self.path
    }

    /// Consume the result and return its parts.
    #[must_use]
    pub fn into_parts(self) -> (MatchDistance, AlignmentPath) {
        (self.distance, self.path)
    }

    /// Stretch both signals onto the common path length.
    ///
    /// Output frame `k` of each signal is the input frame named by path pair
    /// `k`, so the two outputs are frame-for-frame comparable. Each output
    /// keeps its input's sample rate.
    ///
    /// # Panics
    ///
    /// Panics if the path refers to frames outside `x` or `y`, which cannot
    /// happen for the signals this result was computed from.
    #[must_use]
    pub fn warp<X, Y>(&self, x: &X, y: &Y) -> (SignalBuffer, SignalBuffer)
    where
        X: Signal + ?Sized,
        Y: Signal + ?Sized,
    {
        let len = self.path.len();
        let mut out_x = SignalBuffer::zeroed(len, x.sample_rate());
        let mut out_y = SignalBuffer::zeroed(len, y.sample_rate());

        let mut written = 0;
        for (k, pair) in self.path.pairs().iter().enumerate() {
            out_x.set_frame(k, x.frame(pair.x));
            out_y.set_frame(k, y.frame(pair.y));
            written = k + 1;
        }

        out_x.trim_to(written);
        out_y.trim_to(written);
        debug!(frames = written, "signals warped onto alignment path");
        (out_x, out_y)
    }
}
