//! Pure false position (regula falsi).
//!
//! Each step replaces one endpoint with the point where the secant through
//! both endpoints crosses zero. Converges quickly on nearly linear brackets,
//! but when one endpoint's sign is "sticky" only the other endpoint moves and
//! progress becomes linear at best. Prefer [`crate::combined`] unless this
//! behavior is specifically wanted.

use realroot_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    bracket::{Bracket, Start},
    error::checked,
    event::stop_requested,
};

/// Finds a root in `bracket` using false position.
///
/// The search converges when the secant lands on a bracket endpoint or
/// repeats its previous point, both of which mean the secant can no longer
/// move in `f64`. A secant that cannot be formed (infinite endpoint values)
/// is replaced by the midpoint for that step.
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

/// Runs false position without observation.
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
    let mut previous: Option<f64> = None;

    for iter in 1..=config.max_iters() {
        if let Some((x, value)) = bracket.collapsed() {
            return Ok(Solution::converged(x, value, iter - 1));
        }

        let x = match bracket.secant() {
            Some(q) if bracket.contains(q) => q,
            Some(_) => {
                let (x, value) = bracket.best();
                return Ok(Solution::converged(x, value, iter - 1));
            }
            None => bracket.midpoint(),
        };
        let value = checked(x, f.call(x))?;

        let event = Event::Bracket {
            iter,
            bracket: bracket.as_array(),
            x,
            value,
        };
        if stop_requested(observer, &event) {
            return Ok(Solution::stopped(x, value, iter));
        }

        #[allow(clippy::float_cmp)]
        if value == 0.0 || previous == Some(x) {
            return Ok(Solution::converged(x, value, iter));
        }
        bracket.shrink(x, value);
        previous = Some(x);
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
        x: bracket.best().0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Status;

    #[test]
    fn solves_linear_in_one_step() {
        let f = |x: f64| 4.0 * x - 1.0;
        let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 0.25);
    }

    #[test]
    fn finds_square_root() {
        let f = |x: f64| x * x - 2.0;
        let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn survives_sticky_endpoint() {
        // Convex and steep on the right: the right endpoint never moves.
        let f = |x: f64| x.powi(10) - 0.5;
        let solution =
            solve_unobserved(&f, [0.0, 1.5], &Config::default()).expect("should converge slowly");
        assert_relative_eq!(solution.x, 0.5_f64.powf(0.1), epsilon = 1e-12);
        assert!(solution.iters > 10);
    }

    #[test]
    fn handles_infinite_endpoint_values() {
        let f = |x: f64| if x >= 2.0 { f64::INFINITY } else { x - 1.0 };
        let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let f = |x: f64| x * x + 1.0;
        let result = solve_unobserved(&f, [-1.0, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }
}
