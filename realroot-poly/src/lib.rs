//! Polynomials in one variable and a solver for all of their real roots.
//!
//! [`Polynomial`] is a dense, immutable coefficient vector with the usual
//! arithmetic, calculus, and synthetic division. [`solve`] returns every
//! distinct real root in ascending order by isolating roots between the
//! polynomial's critical points and handing each interval to a kernel from
//! [`realroot_search`].
//!
//! ```
//! use realroot_poly::Polynomial;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let p = Polynomial::new([-6.0, 11.0, -6.0, 1.0]);
//! let roots = p.roots().unwrap();
//! assert_eq!(roots.len(), 3);
//! assert!((roots[1] - 2.0).abs() < 1e-12);
//! ```
//!
//! The [`closed_form`] module offers the linear and quadratic formulas the
//! solver uses directly, along with Cardano's and Shengjin's cubic formulas.

pub mod closed_form;
mod polynomial;
mod solve;

pub use polynomial::{Polynomial, ZeroDivisor};
pub use solve::{Config, ConfigError, Error, solve};
