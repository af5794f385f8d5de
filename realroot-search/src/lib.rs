//! Root searches for real functions of one variable.
//!
//! Every kernel consumes a [`Function`] (`f: ℝ → ℝ`) and returns a
//! [`Solution`] or an [`Error`]. Searches run to a floating-point fixed point
//! rather than a tolerance; [`Config`] only caps the number of iterations.
//!
//! # Kernels
//!
//! Bracketing kernels take an interval whose endpoint values have opposite
//! signs (or an endpoint that is already a root):
//!
//! - [`bisection`]: repeated halving; slowest, shape-independent
//! - [`false_position`]: secant through the endpoints; degrades when one
//!   endpoint is sticky
//! - [`combined`]: midpoint and secant point every step; the default
//!
//! Derivative-based kernels take `f` and `f'`:
//!
//! - [`tangent`]: Newton iteration inside a region, falling back to
//!   [`combined`] when it overshoots or escapes
//! - [`monotone`]: Newton walk over the whole line for strictly monotone `f`
//!
//! Each module offers `solve` (with an [`Observer`]) and `solve_unobserved`.
//! The free functions below wrap them with the default config for callers
//! that only want the root.
//!
//! [`Function`]: realroot_core::Function
//! [`Observer`]: realroot_core::Observer

mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub mod bisection;
pub mod combined;
pub mod false_position;
pub mod monotone;
pub mod tangent;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

/// Finds a root of `f` between `a` and `b` by bisection.
///
/// # Errors
///
/// See [`bisection::solve`].
pub fn bisect(f: impl Fn(f64) -> f64, a: f64, b: f64) -> Result<f64, Error> {
    bisection::solve_unobserved(&f, [a, b], &Config::default()).map(|s| s.x)
}

/// Finds a root of `f` between `a` and `b` by false position.
///
/// # Errors
///
/// See [`false_position::solve`].
pub fn false_position(f: impl Fn(f64) -> f64, a: f64, b: f64) -> Result<f64, Error> {
    false_position::solve_unobserved(&f, [a, b], &Config::default()).map(|s| s.x)
}

/// Finds a root of `f` between `a` and `b` with the combined kernel.
///
/// # Errors
///
/// See [`combined::solve`].
pub fn combined_bracket(f: impl Fn(f64) -> f64, a: f64, b: f64) -> Result<f64, Error> {
    combined::solve_unobserved(&f, [a, b], &Config::default()).map(|s| s.x)
}

/// Finds a root of `f` in `[a, b]` by Newton iteration from `x0`.
///
/// # Errors
///
/// See [`tangent::solve`].
pub fn tangent_search(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    a: f64,
    b: f64,
    x0: f64,
) -> Result<f64, Error> {
    tangent::solve_unobserved(&f, &df, [a, b], x0, &Config::default()).map(|s| s.x)
}

/// Finds the root of a strictly monotone `f` by walking from `x0`.
///
/// # Errors
///
/// See [`monotone::solve`].
pub fn monotone_search(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    x0: f64,
) -> Result<f64, Error> {
    monotone::solve_unobserved(&f, &df, x0, &Config::default()).map(|s| s.x)
}
