use thiserror::Error;

const DEFAULT_GROWTH: f64 = 10.0;

/// Configuration for [`solve`](crate::solve()).
///
/// Wraps the [`realroot_search::Config`] handed to every kernel and adds the
/// growth factor used when a tail search has to fall back to expanding a
/// bracket outward from the outermost critical point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    search: realroot_search::Config,
    growth: f64,
}

/// Errors that can occur when validating a solve config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("growth must be finite and greater than one, got {0}")]
    Growth(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: realroot_search::Config::default(),
            growth: DEFAULT_GROWTH,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Growth`] unless `growth` is finite and greater
    /// than one.
    pub fn new(search: realroot_search::Config, growth: f64) -> Result<Self, ConfigError> {
        if !growth.is_finite() || growth <= 1.0 {
            return Err(ConfigError::Growth(growth));
        }
        Ok(Self { search, growth })
    }

    /// The config passed to each search kernel.
    #[must_use]
    pub fn search(&self) -> &realroot_search::Config {
        &self.search
    }

    /// The factor by which a tail bracket grows on each expansion.
    #[must_use]
    pub fn growth(&self) -> f64 {
        self.growth
    }
}
