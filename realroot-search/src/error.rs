use thiserror::Error;

/// Errors that can occur during a root search.
///
/// The variants fall into two groups. Precondition violations mean the search
/// was posed incorrectly and retrying with the same inputs cannot help.
/// Non-convergence means the search was well posed but found nothing, which
/// callers may legitimately expect for rootless sub-problems.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("non-finite bound: {value}")]
    NonFiniteBound { value: f64 },

    #[error("no sign change in bracket: f({left})={left_value}, f({right})={right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    #[error("function returned NaN at x = {x}")]
    NotANumber { x: f64 },

    #[error("seed {seed} lies outside the search region [{lower}, {upper}]")]
    SeedOutsideRegion { seed: f64, lower: f64, upper: f64 },

    #[error("tangent step {step} from x = {x} left the search region")]
    Diverged { x: f64, step: f64 },

    #[error("no convergence after {iters} iterations (last estimate {x})")]
    MaxIters { iters: usize, x: f64 },
}

impl Error {
    /// Returns true if the search was posed incorrectly.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        !self.is_non_convergence()
    }

    /// Returns true if a well-posed search failed to produce a root.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Error::Diverged { .. } | Error::MaxIters { .. })
    }
}

/// Rejects NaN function values.
pub(crate) fn checked(x: f64, value: f64) -> Result<f64, Error> {
    if value.is_nan() {
        Err(Error::NotANumber { x })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        let no_sign_change = Error::NoSignChange {
            left: 0.0,
            right: 1.0,
            left_value: 1.0,
            right_value: 2.0,
        };
        assert!(no_sign_change.is_precondition());
        assert!(!no_sign_change.is_non_convergence());

        let diverged = Error::Diverged { x: 1.0, step: 1e300 };
        assert!(diverged.is_non_convergence());
        assert!(!diverged.is_precondition());

        assert!(Error::MaxIters { iters: 3, x: 0.5 }.is_non_convergence());
        assert!(Error::NotANumber { x: 0.0 }.is_precondition());
    }

    #[test]
    fn checked_passes_infinities() {
        assert_eq!(checked(1.0, f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(checked(1.0, f64::NAN), Err(Error::NotANumber { x: 1.0 }));
    }
}
