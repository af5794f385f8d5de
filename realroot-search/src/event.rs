use realroot_core::Observer;

/// Event emitted by a search kernel after each function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// An interior point of a sign-change bracket was evaluated.
    Bracket {
        /// Iteration counter (1-based within the kernel's loop).
        iter: usize,
        /// Bracket at the time of the evaluation.
        bracket: [f64; 2],
        /// The evaluated point.
        x: f64,
        /// Function value at `x`.
        value: f64,
    },
    /// A Newton iterate was evaluated.
    Tangent {
        /// Iteration counter (1-based within the kernel's loop).
        iter: usize,
        /// The evaluated point.
        x: f64,
        /// Function value at `x`.
        value: f64,
        /// Derivative value at `x`.
        slope: f64,
    },
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Bracket { x, .. } | Event::Tangent { x, .. } => *x,
        }
    }

    /// Returns the function value at the evaluated point.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Event::Bracket { value, .. } | Event::Tangent { value, .. } => *value,
        }
    }

    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Bracket { iter, .. } | Event::Tangent { iter, .. } => *iter,
        }
    }
}

/// Control actions supported by the search kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and report the point just evaluated.
    StopEarly,
}

/// Sends an event to the observer and reports whether it asked to stop.
pub(crate) fn stop_requested<Obs>(observer: &mut Obs, event: &Event) -> bool
where
    Obs: Observer<Event, Action>,
{
    matches!(observer.observe(event), Some(Action::StopEarly))
}
