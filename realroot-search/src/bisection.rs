//! Pure bisection.
//!
//! Halves the bracket until its midpoint coincides with an endpoint, which is
//! the point where `f64` can no longer represent anything between them. There
//! is no tolerance: the search always runs to full double precision. Slowest
//! of the kernels, but it never depends on the shape of `f`.

use realroot_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    bracket::{Bracket, Start},
    error::checked,
    event::stop_requested,
};

/// Finds a root in `bracket` by repeated halving.
///
/// The observer receives an [`Event::Bracket`] after each midpoint evaluation.
///
/// # Errors
///
/// Returns an error if the bounds are not finite, `f` is NaN at an evaluated
/// point, the bounds do not bracket a sign change, or the iteration cap is
/// reached.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, config, &mut observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, ())
}

fn search<F, Obs>(
    f: &F,
    bounds: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut bracket = match Bracket::evaluate(f, bounds)? {
        Start::Root(solution) => return Ok(solution),
        Start::Bracket(bracket) => bracket,
    };

    for iter in 1..=config.max_iters() {
        if let Some((x, value)) = bracket.collapsed() {
            return Ok(Solution::converged(x, value, iter - 1));
        }

        let mid = bracket.midpoint();
        let value = checked(mid, f.call(mid))?;

        let event = Event::Bracket {
            iter,
            bracket: bracket.as_array(),
            x: mid,
            value,
        };
        if stop_requested(observer, &event) {
            return Ok(Solution::stopped(mid, value, iter));
        }

        if value == 0.0 {
            return Ok(Solution::converged(mid, value, iter));
        }
        bracket.shrink(mid, value);
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x: bracket.midpoint(),
    })
}
