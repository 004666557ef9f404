//! Accumulated dissimilarity score.

use std::fmt;

/// Sum of absolute frame differences along an optimal alignment path.
///
/// Zero only when every aligned frame pair is equal. Never negative, since
/// each local cost is an absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MatchDistance(f64);

impl MatchDistance {
    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0, "accumulated distance {value} is negative");
        Self(value)
    }

    /// Return the raw score.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<MatchDistance> for f64 {
    fn from(distance: MatchDistance) -> Self {
        distance.0
    }
}

impl fmt::Display for MatchDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_honors_precision() {
        let d = MatchDistance::new(2.0);
        assert_eq!(d.to_string(), "2");
        assert_eq!(format!("{d:.3}"), "2.000");
    }

    #[test]
    fn converts_into_f64() {
        let raw: f64 = MatchDistance::new(0.25).into();
        assert_eq!(raw, 0.25);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is negative")]
    fn negative_score_rejected_in_debug() {
        let _ = MatchDistance::new(-1.0);
    }
}
