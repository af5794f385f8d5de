use thiserror::Error;

/// Errors that can occur while solving a polynomial.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// A coefficient is infinite or NaN.
    #[error("polynomial has a non-finite coefficient")]
    NonFiniteCoefficient,

    /// Expanding a tail bracket overflowed before it enclosed the root.
    #[error("bracket grown from {edge} overflowed before enclosing a root")]
    Unbracketed { edge: f64 },

    /// A search kernel failed on an interval that must hold a root.
    #[error(transparent)]
    Search(#[from] realroot_search::Error),
}
