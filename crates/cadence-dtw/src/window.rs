//! Warping window constraints on admissible frame pairings.

use std::ops::Range;

/// Restriction on which `(x, y)` frame pairs an alignment may visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum WarpingWindow {
    /// Every pair is admissible; the full matrix is filled.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band: pair `(x, y)` is admissible only if `|x - y| <= radius`.
    SakoeChiba {
        /// Maximum distance from the diagonal.
        radius: usize,
    },
}

impl WarpingWindow {
    /// Return true if frame `x` of the first signal may be paired with frame `y`
    /// of the second.
    #[must_use]
    pub fn admits(&self, x: usize, y: usize) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::SakoeChiba { radius } => x.abs_diff(y) <= *radius,
        }
    }

    /// Return the admissible range of second-signal frames for frame `x`,
    /// clipped to `0..m`.
    #[must_use]
    pub fn frame_range(&self, x: usize, m: usize) -> Range<usize> {
        match self {
            Self::Unconstrained => 0..m,
            Self::SakoeChiba { radius } => {
                let start = x.saturating_sub(*radius).min(m);
                let end = x.saturating_add(*radius).saturating_add(1).min(m);
                start..end
            }
        }
    }
}
