use realroot_core::{Function, Sign};

use crate::{
    Error, Solution,
    error::checked,
};

/// How a bracketing search starts once its endpoints are evaluated.
pub(crate) enum Start {
    /// An endpoint is already an exact root.
    Root(Solution),
    /// The endpoints bracket a sign change.
    Bracket(Bracket),
}

/// Sign-change bracket: ordered endpoints whose function values are nonzero
/// with opposite signs.
///
/// Kernels only ever move an endpoint inward, so the bracket never re-widens
/// and a root stays strictly inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
    right_value: f64,
}

impl Bracket {
    /// Orders and evaluates the bounds of a search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteBound`] for infinite or NaN bounds,
    /// [`Error::NotANumber`] if `f` is NaN at a bound, and
    /// [`Error::NoSignChange`] if neither bound is a root and `f` has the same
    /// sign at both.
    pub(crate) fn evaluate<F>(f: &F, bounds: [f64; 2]) -> Result<Start, Error>
    where
        F: Function + ?Sized,
    {
        let [a, b] = bounds;
        for value in [a, b] {
            if !value.is_finite() {
                return Err(Error::NonFiniteBound { value });
            }
        }
        let (left, right) = if a <= b { (a, b) } else { (b, a) };

        let left_value = checked(left, f.call(left))?;
        if left_value == 0.0 {
            return Ok(Start::Root(Solution::converged(left, left_value, 0)));
        }
        let right_value = checked(right, f.call(right))?;
        if right_value == 0.0 {
            return Ok(Start::Root(Solution::converged(right, right_value, 0)));
        }

        Self::new(left, left_value, right, right_value).map(Start::Bracket)
    }

    /// Creates a bracket from evaluated endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSignChange`] if the values do not have opposite signs.
    pub(crate) fn new(
        left: f64,
        left_value: f64,
        right: f64,
        right_value: f64,
    ) -> Result<Self, Error> {
        if !Sign::differ(left_value, right_value) {
            return Err(Error::NoSignChange {
                left,
                right,
                left_value,
                right_value,
            });
        }
        Ok(Self {
            left,
            right,
            left_value,
            right_value,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Halves each bound first so brackets spanning most of the `f64` range
    /// do not overflow.
    #[must_use]
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Returns true if `x` lies strictly between the bounds.
    #[must_use]
    pub(crate) fn contains(&self, x: f64) -> bool {
        x > self.left && x < self.right
    }

    /// Returns where the secant through both endpoints crosses zero.
    ///
    /// Returns `None` if an endpoint value is infinite or the crossing falls
    /// outside the closed bracket, which happens only through rounding.
    #[must_use]
    pub(crate) fn secant(&self) -> Option<f64> {
        let (l, r) = (self.left_value, self.right_value);
        if !l.is_finite() || !r.is_finite() {
            return None;
        }
        let q = l / (l - r) * (self.right - self.left) + self.left;
        (q >= self.left && q <= self.right).then_some(q)
    }

    /// Returns the endpoint with the smaller absolute value.
    #[must_use]
    pub(crate) fn best(&self) -> (f64, f64) {
        if self.left_value.abs() <= self.right_value.abs() {
            (self.left, self.left_value)
        } else {
            (self.right, self.right_value)
        }
    }

    /// Returns the midpoint and its endpoint value once the bracket has
    /// shrunk to adjacent floats.
    pub(crate) fn collapsed(&self) -> Option<(f64, f64)> {
        let mid = self.midpoint();
        if self.contains(mid) {
            return None;
        }
        #[allow(clippy::float_cmp)]
        let value = if mid == self.left {
            self.left_value
        } else {
            self.right_value
        };
        Some((mid, value))
    }

    /// Replaces the endpoint whose value has the same sign as `value`.
    ///
    /// `x` must lie inside the bracket and `value` must be nonzero.
    pub(crate) fn shrink(&mut self, x: f64, value: f64) {
        if Sign::differ(value, self.left_value) {
            self.right = x;
            self.right_value = value;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }

    /// Narrows to whichever of `[left, p]`, `[p, q]`, `[q, right]` still
    /// holds the sign change.
    ///
    /// Requires `left < p <= q < right` with nonzero values `x = f(p)` and
    /// `z = f(q)`.
    pub(crate) fn split(&mut self, p: f64, x: f64, q: f64, z: f64) {
        if Sign::differ(x, self.left_value) {
            self.right = p;
            self.right_value = x;
        } else if Sign::differ(z, self.right_value) {
            self.left = q;
            self.left_value = z;
        } else {
            self.left = p;
            self.left_value = x;
            self.right = q;
            self.right_value = z;
        }
    }
}
