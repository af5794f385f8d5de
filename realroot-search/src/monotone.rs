//! Root search for strictly monotone functions on the whole real line.
//!
//! Walks Newton steps from a seed with no bounding region. For a function
//! whose derivative never vanishes, the walk either lands on the root,
//! overshoots it (and the two iterates straddling the root are handed to the
//! [combined](crate::combined) kernel), or runs off to infinity, in which case
//! no real root is reachable.

use realroot_core::{Function, Observer};

use crate::{Action, Config, Error, Event, Solution, tangent};

/// Finds the root of a strictly monotone `f` starting from `seed`.
///
/// `df` must be the derivative of `f`.
///
/// # Errors
///
/// Returns [`Error::Diverged`] if the walk escapes to infinity without a sign
/// change, [`Error::MaxIters`] if the cap is reached, and a precondition error
/// for a non-finite seed or NaN function values.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    seed: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    tangent::search(
        f,
        df,
        [f64::NEG_INFINITY, f64::INFINITY],
        seed,
        config,
        &mut observer,
    )
}

/// Runs the monotone search without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, seed: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, seed, config, ())
}
