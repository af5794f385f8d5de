use thiserror::Error;

/// Default iteration cap.
///
/// Halving a bracket that spans the whole finite range of `f64` down to
/// adjacent subnormals takes a little over 2100 steps, so this leaves
/// headroom for every kernel.
const DEFAULT_MAX_ITERS: usize = 4096;

/// Configuration shared by the search kernels.
///
/// Kernels stop on floating-point fixed points rather than tolerances, so the
/// only knob is the iteration cap that turns a stalled search into
/// [`Error::MaxIters`](crate::Error::MaxIters) instead of an endless loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be greater than zero")]
    ZeroIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroIters`] if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the maximum number of iterations a kernel may take.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
