mod arith;
mod division;

use std::fmt;

use num_traits::Float;
use realroot_core::Function;

pub use division::ZeroDivisor;

/// A polynomial in one variable with real coefficients.
///
/// Coefficients are stored in increasing order of degree, so `coeffs()[i]`
/// multiplies `x^i`. Construction trims zero high-order coefficients, which
/// keeps the leading coefficient nonzero; the zero polynomial is stored as
/// the single coefficient `[0]`.
///
/// Polynomials are values: arithmetic returns new polynomials and never
/// mutates an operand.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T = f64> {
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Creates a polynomial from coefficients, constant term first.
    ///
    /// So `Polynomial::new([c, b, a])` is `a x^2 + b x + c`. Trailing zeros
    /// are dropped and an empty input gives the zero polynomial.
    pub fn new(coeffs: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(coeffs.into_iter().collect())
    }

    pub(crate) fn from_vec(mut coeffs: Vec<T>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::from_vec(vec![c])
    }

    /// The coefficients of this polynomial.
    ///
    /// In the returned slice, the coefficient of `x^i` is at index `i`.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Is this the zero polynomial?
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// The coefficient of the highest power of `x`.
    #[must_use]
    pub fn leading(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Are all the coefficients finite?
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Returns the largest absolute value of any coefficient.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.coeffs
            .iter()
            .fold(T::zero(), |max, c| max.max(c.abs()))
    }

    /// Evaluates this polynomial at `x` using Horner's scheme.
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Returns the derivative.
    ///
    /// The derivative of a constant is the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let mut k = T::zero();
        let coeffs = self
            .coeffs
            .iter()
            .skip(1)
            .map(|&c| {
                k = k + T::one();
                c * k
            })
            .collect();
        Self::from_vec(coeffs)
    }

    /// Returns the antiderivative whose constant term is zero.
    #[must_use]
    pub fn integral(&self) -> Self {
        let mut k = T::zero();
        let coeffs = std::iter::once(T::zero())
            .chain(self.coeffs.iter().map(|&c| {
                k = k + T::one();
                c / k
            }))
            .collect();
        Self::from_vec(coeffs)
    }

    /// Multiplies every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: T) -> Self {
        Self::from_vec(self.coeffs.iter().map(|&c| c * k).collect())
    }

    /// Raises this polynomial to the `n`th power; `pow(0)` is `1`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::constant(T::one());
        let mut base = self.clone();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Moves the curve `dx` to the right and `dy` up, giving `p(x - dx) + dy`.
    #[must_use]
    pub fn shift(&self, dx: T, dy: T) -> Self {
        let mut coeffs = self.coeffs.clone();
        let n = coeffs.len();
        // Taylor shift by repeated synthetic division.
        for i in 0..n.saturating_sub(1) {
            for j in (i..n - 1).rev() {
                coeffs[j] = coeffs[j] - dx * coeffs[j + 1];
            }
        }
        coeffs[0] = coeffs[0] + dy;
        Self::from_vec(coeffs)
    }

    /// Divides out the largest power of `x` that divides this polynomial.
    ///
    /// Returns the quotient and the power, which is the multiplicity of the
    /// root at zero. The zero polynomial is returned unchanged with power 0.
    #[must_use]
    pub fn strip_zero_roots(&self) -> (Self, usize) {
        if self.is_zero() {
            return (Self::zero(), 0);
        }
        let power = self.coeffs.iter().take_while(|c| c.is_zero()).count();
        (Self::from_vec(self.coeffs[power..].to_vec()), power)
    }
}

impl<T: Float> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::from_vec(coeffs)
    }
}

impl Function for Polynomial<f64> {
    fn call(&self, x: f64) -> f64 {
        self.eval(x)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c.is_zero() && !(first && i + 1 == self.coeffs.len()) {
                continue;
            }
            let magnitude = c.abs();
            if first {
                if c.is_sign_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_sign_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            if i == 0 || magnitude != T::one() {
                write!(f, "{magnitude}")?;
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
            first = false;
        }
        Ok(())
    }
}
