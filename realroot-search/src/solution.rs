/// Indicates how a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Found an exact zero or reached a floating-point fixed point.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Iteration count when the search finished.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn converged(x: f64, value: f64, iters: usize) -> Self {
        Self {
            status: Status::Converged,
            x,
            value,
            iters,
        }
    }

    pub(crate) fn stopped(x: f64, value: f64, iters: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            x,
            value,
            iters,
        }
    }

    /// Adds iterations spent before this search was handed off.
    pub(crate) fn after(self, iters: usize) -> Self {
        Self {
            iters: self.iters + iters,
            ..self
        }
    }
}
