//! Newton (tangent) search confined to a region.
//!
//! Iterates `x ← x − f(x)/f'(x)` from a seed. Newton's method converges fast
//! near a simple root but offers no guarantee on its own, so the search keeps
//! two safety nets:
//!
//! - When two consecutive iterates have values of opposite sign, they form a
//!   bracket and the [combined](crate::combined) kernel finishes the job.
//! - When a step leaves the region (or is not finite), the step is clamped to
//!   the region boundary. If that boundary point brackets a sign change with
//!   the current iterate the combined kernel takes over; otherwise the search
//!   reports [`Error::Diverged`].
//!
//! Either way the search ends with a root, an error, or the iteration cap.

use realroot_core::{Function, Observer, Sign};
use tracing::debug;

use crate::{
    Action, Config, Error, Event, Solution, combined, error::checked, event::stop_requested,
};

/// Finds a root of `f` inside `region` starting from `seed`.
///
/// `df` must be the derivative of `f`. Either bound of `region` may be
/// infinite. The observer receives an [`Event::Tangent`] for each Newton
/// iterate and, after a hand-off, the combined kernel's [`Event::Bracket`]s.
///
/// # Errors
///
/// Returns a precondition error if a region bound is NaN, the seed is not
/// finite or lies outside the region, or `f` is NaN at an evaluated point.
/// Returns [`Error::Diverged`] if a step escapes the region without
/// bracketing a root and [`Error::MaxIters`] if the cap is reached.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    region: [f64; 2],
    seed: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(f, df, region, seed, config, &mut observer)
}

/// Runs the tangent search without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    region: [f64; 2],
    seed: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, region, seed, config, ())
}

pub(crate) fn search<F, D, Obs>(
    f: &F,
    df: &D,
    region: [f64; 2],
    seed: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [a, b] = region;
    for value in [a, b, seed] {
        if value.is_nan() {
            return Err(Error::NonFiniteBound { value });
        }
    }
    if seed.is_infinite() {
        return Err(Error::NonFiniteBound { value: seed });
    }
    let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
    if seed < lower || seed > upper {
        return Err(Error::SeedOutsideRegion { seed, lower, upper });
    }

    let mut x = seed;
    let mut previous: Option<(f64, f64)> = None;

    for iter in 1..=config.max_iters() {
        let value = checked(x, f.call(x))?;
        let slope = df.call(x);

        let event = Event::Tangent {
            iter,
            x,
            value,
            slope,
        };
        if stop_requested(observer, &event) {
            return Ok(Solution::stopped(x, value, iter));
        }
        if value == 0.0 {
            return Ok(Solution::converged(x, value, iter));
        }

        if let Some((prev_x, prev_value)) = previous
            && Sign::differ(prev_value, value)
        {
            debug!(prev_x, x, "tangent search overshot the root, bracketing");
            return combined::search(f, [prev_x, x], config, observer).map(|s| s.after(iter));
        }

        if !slope.is_finite() {
            return Err(Error::Diverged { x, step: f64::NAN });
        }
        let next = x - value / slope;

        #[allow(clippy::float_cmp)]
        if next == x {
            return Ok(Solution::converged(x, value, iter));
        }

        if !next.is_finite() || next < lower || next > upper {
            return escape(f, (x, value), next, (lower, upper), config, observer)
                .map(|s| s.after(iter));
        }

        previous = Some((x, value));
        x = next;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x,
    })
}

/// Handles a step from `x` to `next` that left the region.
fn escape<F, Obs>(
    f: &F,
    (x, value): (f64, f64),
    next: f64,
    (lower, upper): (f64, f64),
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let diverged = Error::Diverged { x, step: next - x };
    if next.is_nan() {
        return Err(diverged);
    }

    let edge = next.clamp(lower, upper);
    #[allow(clippy::float_cmp)]
    if !edge.is_finite() || edge == x {
        return Err(diverged);
    }

    let edge_value = checked(edge, f.call(edge))?;
    if edge_value == 0.0 {
        return Ok(Solution::converged(edge, edge_value, 0));
    }
    if Sign::differ(value, edge_value) {
        debug!(x, edge, "tangent step left the region, bracketing at the boundary");
        return combined::search(f, [x, edge], config, observer);
    }

    debug!(x, next, "tangent search diverged");
    Err(diverged)
}
