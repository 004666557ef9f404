//! Alignment path types.

/// A single pairing of frame `x` of the first signal with frame `y` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlignedPair {
    /// Frame index in the first signal.
    pub x: usize,
    /// Frame index in the second signal.
    pub y: usize,
}

impl AlignedPair {
    /// Create a pair.
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for AlignedPair {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of aligned pairs from `(0, 0)` to `(n-1, m-1)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AlignmentPath(Vec<AlignedPair>);

impl AlignmentPath {
    pub(crate) fn new(pairs: Vec<AlignedPair>) -> Self {
        Self(pairs)
    }

    /// Return the pairs as a slice.
    #[must_use]
    pub fn pairs(&self) -> &[AlignedPair] {
        &self.0
    }

    /// Return the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the first pair, `(0, 0)` for any computed path.
    #[must_use]
    pub fn first(&self) -> Option<AlignedPair> {
        self.0.first().copied()
    }

    /// Return the last pair, `(n-1, m-1)` for any computed path.
    #[must_use]
    pub fn last(&self) -> Option<AlignedPair> {
        self.0.last().copied()
    }

    /// Return the path as rows of `[x, y]`: one row per match, one column per signal.
    #[must_use]
    pub fn to_index_array(&self) -> Vec<[usize; 2]> {
        self.0.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Return true if this is a valid warping path for signals of `n` and `m`
    /// frames: starts at `(0, 0)`, ends at `(n-1, m-1)`, and every step
    /// advances by `(1, 0)`, `(0, 1)`, or `(1, 1)`.
    #[must_use]
    pub fn is_valid_for(&self, n: usize, m: usize) -> bool {
        if n == 0 || m == 0 {
            return false;
        }
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return false;
        };
        if first != AlignedPair::new(0, 0) || last != AlignedPair::new(n - 1, m - 1) {
            return false;
        }
        self.0.windows(2).all(|w| {
            let dx = w[1].x.checked_sub(w[0].x);
            let dy = w[1].y.checked_sub(w[0].y);
            matches!((dx, dy), (Some(1), Some(0)) | (Some(0), Some(1)) | (Some(1), Some(1)))
        })
    }
}

impl<'a> IntoIterator for &'a AlignmentPath {
    type Item = &'a AlignedPair;
    type IntoIter = std::slice::Iter<'a, AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
