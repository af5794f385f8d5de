//! Core traits and types for the realroot solvers.
//!
//! This crate defines the shared abstractions that the search kernels and the
//! polynomial solver build on:
//!
//! - [`Function`]: a real function of one real variable, `f: ℝ → ℝ`
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Sign`]: the sign of a function value, used for bracket bookkeeping

mod function;
mod observer;
mod sign;

pub use function::Function;
pub use observer::Observer;
pub use sign::Sign;
