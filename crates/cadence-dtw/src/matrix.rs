//! Accumulated distance matrix with an infinite sentinel border.

use std::ops::Index;

/// Dynamic-programming table of minimum cumulative alignment costs.
///
/// Has `n + 1` rows and `m + 1` columns for signals of `n` and `m` frames.
/// Cell `(i, j)` holds the cheapest alignment of the first `i` frames of x
/// with the first `j` frames of y. Row 0 and column 0 are `+inf` except
/// `(0, 0) = 0`, so the recurrence needs no first-row special case.
///
/// Stored row-major in a single flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedDistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl AccumulatedDistanceMatrix {
    /// Allocate the matrix for `n` by `m` frames with the sentinel border set.
    /// Interior cells start at `+inf`, which is also their value when a
    /// warping window excludes them.
    pub(crate) fn with_sentinels(n: usize, m: usize) -> Self {
        let rows = n + 1;
        let cols = m + 1;
        let mut data = vec![f64::INFINITY; rows * cols];
        data[0] = 0.0;
        Self { rows, cols, data }
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Return the three predecessors of `(i, j)` as `(diagonal, above, left)`.
    #[inline]
    pub(crate) fn predecessors(&self, i: usize, j: usize) -> (f64, f64, f64) {
        let above_row = (i - 1) * self.cols;
        let row = i * self.cols;
        (
            self.data[above_row + j - 1],
            self.data[above_row + j],
            self.data[row + j - 1],
        )
    }

    /// Return the number of rows (`n + 1`).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (`m + 1`).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the value at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }

    /// Return row `i` as a slice of `cols()` values.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Return the bottom-right cell: the total accumulated distance.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.data[self.data.len() - 1]
    }
}

impl Index<(usize, usize)> for AccumulatedDistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for {} columns", self.cols);
        &self.data[i * self.cols + j]
    }
}
