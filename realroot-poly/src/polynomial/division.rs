use num_traits::Float;
use thiserror::Error;

use super::Polynomial;

/// Returned when dividing by the zero polynomial.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("division by the zero polynomial")]
pub struct ZeroDivisor;

impl<T: Float> Polynomial<T> {
    /// Divides by `divisor` using synthetic division.
    ///
    /// Returns `(quotient, remainder)` with `self = quotient * divisor +
    /// remainder` and the remainder of lower degree than the divisor. When
    /// the divisor has the higher degree the quotient is zero and the
    /// remainder is `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ZeroDivisor> {
        if divisor.is_zero() {
            return Err(ZeroDivisor);
        }

        let (n, m) = (self.coeffs.len(), divisor.coeffs.len());
        if m > n {
            return Ok((Self::zero(), self.clone()));
        }

        let lead = divisor.leading();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); n - m + 1];
        for i in (0..quot.len()).rev() {
            let k = rem[i + m - 1] / lead;
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] = rem[i + j] - k * d;
            }
            quot[i] = k;
        }
        rem.truncate(m - 1);

        Ok((Self::from_vec(quot), Self::from_vec(rem)))
    }

    /// The quotient of [`Polynomial::div_rem`].
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if `divisor` is the zero polynomial.
    pub fn div(&self, divisor: &Self) -> Result<Self, ZeroDivisor> {
        self.div_rem(divisor).map(|(quot, _)| quot)
    }

    /// The remainder of [`Polynomial::div_rem`].
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if `divisor` is the zero polynomial.
    pub fn rem(&self, divisor: &Self) -> Result<Self, ZeroDivisor> {
        self.div_rem(divisor).map(|(_, rem)| rem)
    }
}
