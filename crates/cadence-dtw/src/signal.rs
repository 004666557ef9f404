//! Signal capability traits and their in-memory implementations.

use std::ops::Index;

use crate::error::{MatchError, SignalSide};

/// Read access to a sampled signal.
///
/// The matcher depends only on this capability set, not on how samples are
/// produced. Implementations must be consistent: `frame(i)` is defined for
/// every `i < frame_count()`.
pub trait Signal {
    /// Return the number of frames.
    fn frame_count(&self) -> usize;

    /// Return the frame at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= frame_count()`.
    fn frame(&self, index: usize) -> f64;

    /// Return the sample rate in samples per second.
    fn sample_rate(&self) -> u32;

    /// Return true if the signal has no frames.
    fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}

/// Write access to a sampled signal.
pub trait SignalMut: Signal {
    /// Overwrite the frame at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= frame_count()`.
    fn set_frame(&mut self, index: usize, value: f64);

    /// Truncate the signal to at most `len` frames. Longer lengths are a no-op.
    fn trim_to(&mut self, len: usize);
}

/// Owned, buffer-backed signal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignalBuffer {
    frames: Vec<f64>,
    sample_rate: u32,
}

impl SignalBuffer {
    /// Create a signal from existing samples.
    #[must_use]
    pub fn new(frames: Vec<f64>, sample_rate: u32) -> Self {
        Self { frames, sample_rate }
    }

    /// Create a signal of `len` zero-valued frames, ready to be filled with
    /// [`SignalMut::set_frame`].
    #[must_use]
    pub fn zeroed(len: usize, sample_rate: u32) -> Self {
        Self {
            frames: vec![0.0; len],
            sample_rate,
        }
    }

    /// Borrow the samples.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.frames
    }

    /// Borrow this signal as a read-only view.
    #[must_use]
    pub fn as_view(&self) -> SignalSlice<'_> {
        SignalSlice::new(&self.frames, self.sample_rate)
    }

    /// Consume and return the inner sample vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.frames
    }
}

impl Signal for SignalBuffer {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame(&self, index: usize) -> f64 {
        self.frames[index]
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl SignalMut for SignalBuffer {
    fn set_frame(&mut self, index: usize, value: f64) {
        self.frames[index] = value;
    }

    fn trim_to(&mut self, len: usize) {
        self.frames.truncate(len);
    }
}

impl Index<usize> for SignalBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.frames[index]
    }
}

impl AsRef<[f64]> for SignalBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.frames
    }
}

/// Borrowed, read-only signal over a sample slice. Zero-copy.
#[derive(Debug, Clone, Copy)]
pub struct SignalSlice<'a> {
    frames: &'a [f64],
    sample_rate: u32,
}

impl<'a> SignalSlice<'a> {
    /// Create a view over `frames` sampled at `sample_rate`.
    #[must_use]
    pub fn new(frames: &'a [f64], sample_rate: u32) -> Self {
        Self { frames, sample_rate }
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.frames
    }
}

impl Signal for SignalSlice<'_> {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame(&self, index: usize) -> f64 {
        self.frames[index]
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl<S: Signal + ?Sized> Signal for &S {
    fn frame_count(&self) -> usize {
        (**self).frame_count()
    }

    fn frame(&self, index: usize) -> f64 {
        (**self).frame(index)
    }

    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }
}

/// Copy the frames of `signal` into a vector, rejecting empty signals and
/// non-finite frames.
pub(crate) fn collect_frames<S: Signal + ?Sized>(
    signal: &S,
    side: SignalSide,
) -> Result<Vec<f64>, MatchError> {
    let len = signal.frame_count();
    if len == 0 {
        return Err(MatchError::EmptySignal { side });
    }
    let frames: Vec<f64> = (0..len).map(|i| signal.frame(i)).collect();
    if let Some(index) = frames.iter().position(|v| !v.is_finite()) {
        return Err(MatchError::NonFiniteFrame { side, index });
    }
    Ok(frames)
}
