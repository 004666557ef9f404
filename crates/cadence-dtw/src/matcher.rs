//! Dynamic time warping matcher: accumulated distance fill and path backtrace.

use tracing::{debug, instrument};

use crate::config::MatcherConfig;
use crate::distance::MatchDistance;
use crate::error::{MatchError, SignalSide};
use crate::matrix::AccumulatedDistanceMatrix;
use crate::path::{AlignedPair, AlignmentPath};
use crate::result::MatchResult;
use crate::signal::{Signal, SignalBuffer, SignalSlice, collect_frames};
use crate::window::WarpingWindow;

const BYTES_PER_CELL: u64 = std::mem::size_of::<f64>() as u64;

/// Matches two borrowed signals.
///
/// [`compute`][Matcher::compute] runs the full dynamic program and caches the
/// resulting [`MatchResult`]; the accessors read that cache and fail with
/// [`MatchError::NotComputed`] until a computation has succeeded. Every call
/// to `compute` starts from scratch, so repeated calls on the same signals
/// yield identical results.
#[derive(Debug)]
pub struct Matcher<'a, X: ?Sized, Y: ?Sized> {
    x: &'a X,
    y: &'a Y,
    config: MatcherConfig,
    result: Option<MatchResult>,
}

impl<'a, X, Y> Matcher<'a, X, Y>
where
    X: Signal + ?Sized,
    Y: Signal + ?Sized,
{
    /// Create a matcher with the default configuration.
    #[must_use]
    pub fn new(x: &'a X, y: &'a Y) -> Self {
        Self::with_config(x, y, MatcherConfig::default())
    }

    /// Create a matcher with an explicit configuration.
    #[must_use]
    pub fn with_config(x: &'a X, y: &'a Y, config: MatcherConfig) -> Self {
        Self {
            x,
            y,
            config,
            result: None,
        }
    }

    /// Return the configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Compute the accumulated distance and the optimal alignment path.
    ///
    /// Clears any previously cached result before starting, so a failed call
    /// leaves the accessors reporting [`MatchError::NotComputed`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatchError::EmptySignal`] | Either signal has no frames |
    /// | [`MatchError::ResourceLimitExceeded`] | `n * m * 8` bytes exceed the memory ceiling |
    /// | [`MatchError::NonFiniteFrame`] | A frame is NaN or infinite |
    /// | [`MatchError::NonFiniteDistance`] | The final cell is unreachable or overflows |
    #[instrument(skip(self), fields(n = self.x.frame_count(), m = self.y.frame_count()))]
    pub fn compute(&mut self) -> Result<&MatchResult, MatchError> {
        self.result = None;

        let matrix = self.compute_matrix()?;
        let distance = MatchDistance::new(matrix.distance());
        let path = backtrace(&matrix);
        debug!(
            %distance,
            path_len = path.len(),
            "match computed"
        );

        Ok(self.result.insert(MatchResult::new(distance, path)))
    }

    /// Fill and return the accumulated distance matrix without reconstructing
    /// the path. Does not touch the cached result.
    ///
    /// # Errors
    ///
    /// Same as [`compute`][Matcher::compute].
    pub fn compute_matrix(&self) -> Result<AccumulatedDistanceMatrix, MatchError> {
        let (n, m) = self.frame_counts()?;
        self.check_memory(n, m)?;

        let xs = collect_frames(self.x, SignalSide::X)?;
        let ys = collect_frames(self.y, SignalSide::Y)?;

        let matrix = fill(&xs, &ys, self.config.window);
        if !matrix.distance().is_finite() {
            return Err(MatchError::NonFiniteDistance { n, m });
        }
        Ok(matrix)
    }

    /// Compute only the accumulated distance, holding two rolling rows instead
    /// of the full matrix. Runs in O(n * m) time and O(m) space, so the memory
    /// ceiling does not apply. The value is bit-identical to the distance
    /// produced by [`compute`][Matcher::compute].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatchError::EmptySignal`] | Either signal has no frames |
    /// | [`MatchError::NonFiniteFrame`] | A frame is NaN or infinite |
    /// | [`MatchError::NonFiniteDistance`] | The final cell is unreachable or overflows |
    #[instrument(skip(self), fields(n = self.x.frame_count(), m = self.y.frame_count()))]
    pub fn distance_only(&self) -> Result<MatchDistance, MatchError> {
        let (n, m) = self.frame_counts()?;
        let xs = collect_frames(self.x, SignalSide::X)?;
        let ys = collect_frames(self.y, SignalSide::Y)?;

        let dist = rolling_distance(&xs, &ys, self.config.window);
        if !dist.is_finite() {
            return Err(MatchError::NonFiniteDistance { n, m });
        }
        Ok(MatchDistance::new(dist))
    }

    /// Return the cached result of the last successful [`compute`][Matcher::compute].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotComputed`] if no computation has succeeded.
    pub fn result(&self) -> Result<&MatchResult, MatchError> {
        self.result.as_ref().ok_or(MatchError::NotComputed)
    }

    /// Return the computed distance.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotComputed`] if no computation has succeeded.
    pub fn distance(&self) -> Result<MatchDistance, MatchError> {
        self.result().map(MatchResult::distance)
    }

    /// Return the computed alignment path.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotComputed`] if no computation has succeeded.
    pub fn path(&self) -> Result<&AlignmentPath, MatchError> {
        self.result().map(MatchResult::path)
    }

    /// Warp both input signals onto the computed path. See [`MatchResult::warp`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotComputed`] if no computation has succeeded.
    pub fn warp_signals(&self) -> Result<(SignalBuffer, SignalBuffer), MatchError> {
        Ok(self.result()?.warp(self.x, self.y))
    }

    fn frame_counts(&self) -> Result<(usize, usize), MatchError> {
        let n = self.x.frame_count();
        let m = self.y.frame_count();
        if n == 0 {
            return Err(MatchError::EmptySignal { side: SignalSide::X });
        }
        if m == 0 {
            return Err(MatchError::EmptySignal { side: SignalSide::Y });
        }
        Ok((n, m))
    }

    /// Reject inputs whose matrix would exceed the memory ceiling. Runs
    /// before any frame is copied or any cell is allocated.
    fn check_memory(&self, n: usize, m: usize) -> Result<(), MatchError> {
        let required_bytes = (n as u64)
            .checked_mul(m as u64)
            .and_then(|cells| cells.checked_mul(BYTES_PER_CELL))
            .unwrap_or(u64::MAX);
        let limit_bytes = self.config.memory_limit_bytes;
        debug!(
            required_bytes,
            required_mib = required_bytes / (1024 * 1024),
            limit_bytes,
            "projected accumulated distance matrix"
        );
        if required_bytes > limit_bytes {
            return Err(MatchError::ResourceLimitExceeded {
                n,
                m,
                required_bytes,
                limit_bytes,
            });
        }
        Ok(())
    }
}

/// Match two raw sample buffers that share one sample rate.
///
/// # Errors
///
/// Same as [`Matcher::compute`].
pub fn match_buffers(
    x: &[f64],
    y: &[f64],
    sample_rate: u32,
    config: MatcherConfig,
) -> Result<MatchResult, MatchError> {
    let x = SignalSlice::new(x, sample_rate);
    let y = SignalSlice::new(y, sample_rate);
    let mut matcher = Matcher::with_config(&x, &y, config);
    matcher.compute().cloned()
}

/// Minimum of the three predecessors. The fill and the backtrace must share
/// this exact formula so the backtrace's equality tests see identical values.
#[inline]
fn min3(diag: f64, above: f64, left: f64) -> f64 {
    let min = diag.min(above);
    if min > left { left } else { min }
}

/// Row-major fill of `D[i][j] = |x[i-1] - y[j-1]| + min(D[i-1][j-1], D[i-1][j], D[i][j-1])`.
fn fill(xs: &[f64], ys: &[f64], window: WarpingWindow) -> AccumulatedDistanceMatrix {
    let n = xs.len();
    let m = ys.len();
    let mut d = AccumulatedDistanceMatrix::with_sentinels(n, m);

    for i in 1..=n {
        let xi = xs[i - 1];
        for y in window.frame_range(i - 1, m) {
            let j = y + 1;
            let cost = (xi - ys[y]).abs();
            let (diag, above, left) = d.predecessors(i, j);
            d.set(i, j, cost + min3(diag, above, left));
        }
    }

    d
}

/// Same recurrence as [`fill`] over two rows of `m + 1` cells. Slot 0 of each
/// row is the infinite sentinel column.
fn rolling_distance(xs: &[f64], ys: &[f64], window: WarpingWindow) -> f64 {
    let m = ys.len();
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for (x, &xi) in xs.iter().enumerate() {
        curr.fill(f64::INFINITY);
        for y in window.frame_range(x, m) {
            let j = y + 1;
            let cost = (xi - ys[y]).abs();
            curr[j] = cost + min3(prev[j - 1], prev[j], curr[j - 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Walk back from `(n, m)` to `(1, 1)`, preferring diagonal, then above,
/// then left when predecessors tie.
///
/// Requires a finite bottom-right cell: every cell on the walk is then finite,
/// so the chosen predecessor is never a sentinel and the walk stays inside
/// rows and columns `1..`.
fn backtrace(d: &AccumulatedDistanceMatrix) -> AlignmentPath {
    let mut i = d.rows() - 1;
    let mut j = d.cols() - 1;
    let mut pairs = Vec::with_capacity(i + j - 1);
    pairs.push(AlignedPair::new(i - 1, j - 1));

    while !(i == 1 && j == 1) {
        let (diag, above, left) = d.predecessors(i, j);
        let min = min3(diag, above, left);
        if diag == min {
            i -= 1;
            j -= 1;
        } else if above == min {
            i -= 1;
        } else {
            j -= 1;
        }
        pairs.push(AlignedPair::new(i - 1, j - 1));
    }

    pairs.reverse();
    AlignmentPath::new(pairs)
}
