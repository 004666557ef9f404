//! Matcher configuration.

use crate::window::WarpingWindow;

const MIB: u64 = 1024 * 1024;

/// Default ceiling on the accumulated distance matrix footprint: 4000 MiB.
pub const DEFAULT_MEMORY_LIMIT_BYTES: u64 = 4000 * MIB;

/// Configuration for a [`Matcher`](crate::Matcher).
///
/// Construct via [`MatcherConfig::new`] (or `Default`), then chain `with_*`
/// methods to override defaults.
///
/// # Defaults
///
/// | Parameter            | Default                           |
/// |----------------------|-----------------------------------|
/// | `memory_limit_bytes` | 4000 MiB                          |
/// | `window`             | [`WarpingWindow::Unconstrained`]  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub(crate) memory_limit_bytes: u64,
    pub(crate) window: WarpingWindow,
}

impl MatcherConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            memory_limit_bytes: DEFAULT_MEMORY_LIMIT_BYTES,
            window: WarpingWindow::Unconstrained,
        }
    }

    /// Set the ceiling, in bytes, on the projected accumulated distance matrix.
    /// `compute()` refuses inputs whose `n * m * 8` bytes exceed it.
    #[must_use]
    pub fn with_memory_limit(mut self, bytes: u64) -> Self {
        self.memory_limit_bytes = bytes;
        self
    }

    /// Set the memory ceiling in mebibytes.
    #[must_use]
    pub fn with_memory_limit_mib(self, mib: u64) -> Self {
        self.with_memory_limit(mib.saturating_mul(MIB))
    }

    /// Set the warping window.
    #[must_use]
    pub fn with_window(mut self, window: WarpingWindow) -> Self {
        self.window = window;
        self
    }

    /// Return the memory ceiling in bytes.
    #[must_use]
    pub fn memory_limit_bytes(&self) -> u64 {
        self.memory_limit_bytes
    }

    /// Return the warping window.
    #[must_use]
    pub fn window(&self) -> WarpingWindow {
        self.window
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}
