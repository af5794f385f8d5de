//! Combined bisection and false position.
//!
//! # Algorithm
//!
//! Every iteration evaluates two candidate points inside the bracket
//! `[a, b]`: the midpoint `p` and the secant crossing `q`. With the pair
//! ordered so that `p <= q`, the signs of `f(a)`, `f(p)`, `f(q)`, `f(b)`
//! identify which of `[a, p]`, `[p, q]`, `[q, b]` still holds the sign
//! change, and the search continues in that sub-bracket.
//!
//! Because the midpoint is always one of the cut points, every iteration at
//! least halves the bracket, so this kernel keeps the worst case of bisection
//! while the secant point gives superlinear progress on smooth brackets.
//!
//! If the secant point cannot be formed or falls outside `(a, b)` through
//! rounding, the iteration updates the bracket from the midpoint alone.
//!
//! # When to Use
//!
//! This is the default kernel and the one the polynomial solver relies on. It
//! needs only a sign-change bracket and no derivative.

use realroot_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    bracket::{Bracket, Start},
    error::checked,
    event::stop_requested,
};

/// Finds a root in `bracket` using combined bisection and false position.
///
/// The observer receives an [`Event::Bracket`] after each evaluation, so up
/// to two events per iteration.
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

/// Runs the combined search without observation.
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

/// Shared entry point for kernels that hand a bracket over mid-search.
pub(crate) fn search<F, Obs>(
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

        let p = bracket.midpoint();
        let x = checked(p, f.call(p))?;
        let event = Event::Bracket {
            iter,
            bracket: bracket.as_array(),
            x: p,
            value: x,
        };
        if stop_requested(observer, &event) {
            return Ok(Solution::stopped(p, x, iter));
        }
        if x == 0.0 {
            return Ok(Solution::converged(p, x, iter));
        }

        let Some(q) = bracket.secant().filter(|&q| bracket.contains(q)) else {
            bracket.shrink(p, x);
            continue;
        };
        let z = checked(q, f.call(q))?;
        let event = Event::Bracket {
            iter,
            bracket: bracket.as_array(),
            x: q,
            value: z,
        };
        if stop_requested(observer, &event) {
            return Ok(Solution::stopped(q, z, iter));
        }
        if z == 0.0 {
            return Ok(Solution::converged(q, z, iter));
        }

        if p <= q {
            bracket.split(p, x, q, z);
        } else {
            bracket.split(q, z, p, x);
        }
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x: bracket.best().0,
    })
}
