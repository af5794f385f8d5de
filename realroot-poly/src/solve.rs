//! Real-root isolation for polynomials.
//!
//! A polynomial is monotone between consecutive real roots of its derivative
//! (its critical points), so each such interval holds at most one root and
//! holds one exactly when the polynomial changes sign across it. The solver
//! recursively finds the critical points, then runs one search per interval:
//!
//! - between two critical points, the [combined] kernel when the endpoint
//!   values differ in sign;
//! - beyond the outermost critical points, a [tangent] search toward
//!   infinity when the polynomial's sign at that infinity differs from its
//!   value at the edge, falling back to a growing bracket;
//! - with no critical points at all, a single [monotone] walk.
//!
//! Critical points where the polynomial vanishes up to rounding are roots
//! themselves, and the intervals next to them hold no others. Each level
//! divides the coefficients by a power of two first, which is exact and keeps
//! the derivative's coefficients finite.
//!
//! Degrees one and two use the closed forms in [`closed_form`](crate::closed_form).
//! A root at zero is factored out first and restored at the end, which keeps
//! the inner searches away from a common source of precision loss.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use realroot_core::Sign;
use realroot_search::{combined, monotone, tangent};
use tracing::{debug, trace};

use crate::{Polynomial, closed_form};

/// Direction of a tail interval.
#[derive(Debug, Clone, Copy)]
enum Tail {
    Below,
    Above,
}

impl Tail {
    fn direction(self) -> f64 {
        match self {
            Tail::Below => -1.0,
            Tail::Above => 1.0,
        }
    }
}

/// Finds every distinct real root of `poly`.
///
/// Roots come back in ascending order, each listed once regardless of its
/// multiplicity. Both the zero polynomial and polynomials without real roots
/// give an empty vector; use [`Polynomial::is_zero`] to tell them apart.
///
/// A repeated root is also a root of the derivative, so it shows up as a
/// critical point. A critical point is taken as a root when the polynomial's
/// value there is within the rounding error of evaluating it, and the
/// intervals on either side are then left unsearched. Repeated roots closer
/// together than that rounding error merge into one.
///
/// # Errors
///
/// Returns [`Error::NonFiniteCoefficient`] for infinite or NaN coefficients.
/// Search failures on an interval known to hold a root are reported as
/// [`Error::Search`] or [`Error::Unbracketed`].
pub fn solve(poly: &Polynomial, config: &Config) -> Result<Vec<f64>, Error> {
    if !poly.is_finite() {
        return Err(Error::NonFiniteCoefficient);
    }

    let (reduced, zeros) = poly.strip_zero_roots();
    let mut roots = isolate(&reduced, config)?;
    if zeros > 0 {
        let at = roots.partition_point(|&r| r < 0.0);
        if roots.get(at) != Some(&0.0) {
            roots.insert(at, 0.0);
        }
    }
    Ok(roots)
}

impl Polynomial<f64> {
    /// Finds every distinct real root with the default [`Config`].
    ///
    /// # Errors
    ///
    /// See [`solve`].
    pub fn roots(&self) -> Result<Vec<f64>, Error> {
        solve(self, &Config::default())
    }
}

fn isolate(poly: &Polynomial, config: &Config) -> Result<Vec<f64>, Error> {
    let Some(degree) = poly.degree() else {
        return Ok(Vec::new());
    };
    let c = poly.coeffs();
    match degree {
        0 => return Ok(Vec::new()),
        1 => return Ok(closed_form::solve_linear([c[0], c[1]])),
        2 => return Ok(closed_form::solve_quadratic([c[0], c[1], c[2]])),
        _ => {}
    }

    let poly = &(poly / closed_form::binade(poly.magnitude()));
    let deriv = poly.derivative();
    let critical = solve(&deriv, config)?;
    debug!(degree, critical = critical.len(), "isolating roots between critical points");

    let (Some(&first), Some(&last)) = (critical.first(), critical.last()) else {
        return Ok(vec![monotone_root(poly, &deriv, config)?]);
    };

    let touching: Vec<bool> = critical.iter().map(|&x| vanishes_at(poly, x)).collect();
    let mut roots: Vec<f64> = critical
        .iter()
        .zip(&touching)
        .filter_map(|(&x, &touches)| touches.then_some(x))
        .collect();
    if !roots.is_empty() {
        trace!(?roots, "critical points touching zero");
    }

    if touching.first() == Some(&false) {
        roots.extend(tail_root(poly, &deriv, first, Tail::Below, config)?);
    }
    for (pair, touches) in critical.windows(2).zip(touching.windows(2)) {
        if touches[0] || touches[1] {
            continue;
        }
        roots.extend(interior_root(poly, pair[0], pair[1], config)?);
    }
    if touching.last() == Some(&false) {
        roots.extend(tail_root(poly, &deriv, last, Tail::Above, config)?);
    }

    roots.sort_by(f64::total_cmp);
    roots.dedup();
    Ok(roots)
}

/// Whether `poly(x)` is zero up to the rounding error of Horner's scheme,
/// which is at most `2 n eps sum |c_i| |x|^i` for degree `n`.
fn vanishes_at(poly: &Polynomial, x: f64) -> bool {
    let (bound, terms) = poly
        .coeffs()
        .iter()
        .rev()
        .fold((0.0, 0.0), |(sum, terms), c| (sum * x.abs() + c.abs(), terms + 1.0));
    poly.eval(x).abs() <= 2.0 * (terms - 1.0) * f64::EPSILON * bound
}

/// Root between two consecutive critical points, if the sign changes.
///
/// Neither endpoint may touch zero: a root there rules out another one inside.
fn interior_root(poly: &Polynomial, a: f64, b: f64, config: &Config) -> Result<Option<f64>, Error> {
    let (fa, fb) = (poly.eval(a), poly.eval(b));
    trace!(a, b, fa, fb, "interior interval");
    if !Sign::differ(fa, fb) {
        return Ok(None);
    }
    let solution = combined::solve_unobserved(poly, [a, b], config.search())?;
    Ok(Some(solution.x))
}

/// Root between the outermost critical point `edge` and infinity, for an
/// `edge` that does not touch zero.
fn tail_root(
    poly: &Polynomial,
    deriv: &Polynomial,
    edge: f64,
    tail: Tail,
    config: &Config,
) -> Result<Option<f64>, Error> {
    let edge_value = poly.eval(edge);
    if !Sign::differ(edge_value, sign_at_infinity(poly, tail)) {
        return Ok(None);
    }

    let direction = tail.direction();
    let seed = edge + direction * 1.0_f64.max(edge.abs() * f64::EPSILON);
    let region = match tail {
        Tail::Below => [f64::NEG_INFINITY, edge],
        Tail::Above => [edge, f64::INFINITY],
    };
    trace!(edge, seed, ?tail, "tail interval");

    match tangent::solve_unobserved(poly, deriv, region, seed, config.search()) {
        Ok(solution) => Ok(Some(solution.x)),
        Err(err) if err.is_non_convergence() => {
            debug!(edge, %err, "tangent search failed, growing bracket");
            grow_bracket(poly, edge, edge_value, direction, config).map(Some)
        }
        Err(err) => Err(err.into()),
    }
}

/// Root of a polynomial whose derivative has no real roots.
fn monotone_root(poly: &Polynomial, deriv: &Polynomial, config: &Config) -> Result<f64, Error> {
    match monotone::solve_unobserved(poly, deriv, 0.0, config.search()) {
        Ok(solution) => Ok(solution.x),
        Err(err) if err.is_non_convergence() => {
            debug!(%err, "monotone search failed, growing bracket");
            let origin_value = poly.eval(0.0);
            let tail = if Sign::differ(origin_value, sign_at_infinity(poly, Tail::Above)) {
                Tail::Above
            } else {
                Tail::Below
            };
            grow_bracket(poly, 0.0, origin_value, tail.direction(), config)
        }
        Err(err) => Err(err.into()),
    }
}

/// Steps away from `edge` by growing distances until the sign changes, then
/// solves the resulting bracket.
fn grow_bracket(
    poly: &Polynomial,
    edge: f64,
    edge_value: f64,
    direction: f64,
    config: &Config,
) -> Result<f64, Error> {
    let mut step = 1.0_f64.max(edge.abs());
    loop {
        let x = edge + direction * step;
        if !x.is_finite() {
            return Err(Error::Unbracketed { edge });
        }
        let value = poly.eval(x);
        if value == 0.0 || Sign::differ(edge_value, value) {
            trace!(edge, x, "grown bracket encloses a root");
            let solution = combined::solve_unobserved(poly, [edge, x], config.search())?;
            return Ok(solution.x);
        }
        step *= config.growth();
    }
}

/// The sign `poly` takes as `x` runs off to the given infinity.
fn sign_at_infinity(poly: &Polynomial, tail: Tail) -> f64 {
    let odd = poly.degree().is_some_and(|d| d % 2 == 1);
    match tail {
        Tail::Below if odd => -poly.leading(),
        _ => poly.leading(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn roots(coeffs: &[f64]) -> Vec<f64> {
        Polynomial::new(coeffs.iter().copied())
            .roots()
            .expect("finite polynomial should solve")
    }

    /// Monic polynomial with the given roots, repeated ones included.
    fn from_roots(roots: &[f64]) -> Polynomial {
        roots
            .iter()
            .map(|&r| Polynomial::new([-r, 1.0]))
            .fold(Polynomial::constant(1.0), |acc, factor| acc * factor)
    }

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "roots {actual:?}, expected {expected:?}"
        );
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn quartic_with_zero_root() {
        // x^4 - 6x^3 + 11x^2 - 6x = x (x - 1)(x - 2)(x - 3)
        assert_roots(&roots(&[0.0, -6.0, 11.0, -6.0, 1.0]), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn constants_have_no_roots() {
        assert!(roots(&[1.0]).is_empty());
        assert!(roots(&[-3.5]).is_empty());

        let zero = Polynomial::<f64>::zero();
        assert!(zero.roots().expect("zero solves").is_empty());
        assert!(zero.is_zero());
    }

    #[test]
    fn low_degrees_use_closed_forms() {
        assert_eq!(roots(&[-3.0, 2.0]), vec![1.5]);
        assert_eq!(roots(&[2.0, -3.0, 1.0]), vec![1.0, 2.0]);
        assert!(roots(&[1.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn odd_power_plus_one() {
        assert_roots(&roots(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), &[-1.0]);
    }

    #[test]
    fn even_power_minus_one() {
        assert_roots(&roots(&[-1.0, 0.0, 0.0, 0.0, 1.0]), &[-1.0, 1.0]);
    }

    #[test]
    fn pure_power_has_single_zero_root() {
        assert_eq!(roots(&[0.0, 0.0, 0.0, 1.0]), vec![0.0]);
        assert_eq!(roots(&[0.0, 0.0, 0.0, 0.0, -2.0]), vec![0.0]);
    }

    #[test]
    fn rootless_even_polynomials() {
        assert!(roots(&[1.0, 0.0, 1.0]).is_empty());
        assert!(roots(&[1.0, 0.0, 0.0, 0.0, 1.0]).is_empty());
        // x^4 - 2x^2 + 2 has minima at +-1 with value 1.
        assert!(roots(&[2.0, 0.0, -2.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn monotone_cubic() {
        // x^3 + x + 1 has no critical points.
        let p = Polynomial::new([1.0, 1.0, 0.0, 1.0]);
        let found = p.roots().expect("should solve");
        assert_eq!(found.len(), 1);
        assert_relative_eq!(found[0], -0.682_327_803_828_019_3, epsilon = 1e-12);
        assert!(p.eval(found[0]).abs() < 1e-15);
    }

    #[test]
    fn four_simple_roots() {
        // (x - 1)(x - 2)(x - 3)(x - 4)
        let p = from_roots(&[1.0, 2.0, 3.0, 4.0]);
        let found = p.roots().expect("should solve");
        assert_roots(&found, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn double_root_on_critical_point() {
        // x^3 - 4x^2 + 5x - 2 = (x - 1)^2 (x - 2)
        assert_roots(&roots(&[-2.0, 5.0, -4.0, 1.0]), &[1.0, 2.0]);
    }

    #[test]
    fn double_roots_off_the_binary_grid() {
        // (x^2 - 2)^2 only reaches zero at +-sqrt 2 up to rounding.
        let sqrt2 = 2.0_f64.sqrt();
        let found = from_roots(&[sqrt2, sqrt2, -sqrt2, -sqrt2])
            .roots()
            .expect("should solve");
        assert_roots(&found, &[-sqrt2, sqrt2]);

        let found = from_roots(&[-0.3, -0.3, 2.0]).roots().expect("should solve");
        assert_roots(&found, &[-0.3, 2.0]);

        let found = from_roots(&[-1.5, -1.5, 0.25, 0.25]).roots().expect("should solve");
        assert_roots(&found, &[-1.5, 0.25]);
    }

    #[test]
    fn double_root_next_to_simple_roots() {
        let found = from_roots(&[1.0, 1.0, 2.0, 3.0]).roots().expect("should solve");
        assert_roots(&found, &[1.0, 2.0, 3.0]);

        let found = from_roots(&[0.1, 0.1, 3.0]).roots().expect("should solve");
        assert_roots(&found, &[0.1, 3.0]);
    }

    #[test]
    fn higher_multiplicities_give_one_root() {
        let found = from_roots(&[0.1, 0.1, 0.1]).roots().expect("should solve");
        assert_eq!(found.len(), 1);
        assert_relative_eq!(found[0], 0.1, max_relative = 1e-12);

        let found = from_roots(&[0.7; 4]).roots().expect("should solve");
        assert_eq!(found.len(), 1);
        assert_relative_eq!(found[0], 0.7, max_relative = 1e-12);
    }

    #[test]
    fn huge_leading_coefficient() {
        // The derivative 3e308 x^2 would overflow without rescaling.
        let found = roots(&[1.0, 0.0, 0.0, 1e308]);
        assert_eq!(found.len(), 1);
        assert_relative_eq!(found[0], -(1e-308_f64).cbrt(), max_relative = 1e-12);
    }

    #[test]
    fn huge_middle_coefficient() {
        let found = roots(&[1.0, 1e200, 1.0]);
        assert_eq!(found.len(), 2);
        assert_relative_eq!(found[0], -1e200, max_relative = 1e-12);
        assert_relative_eq!(found[1], -1e-200, max_relative = 1e-12);
    }

    #[test]
    fn vanishing_tracks_evaluation_error() {
        let p = from_roots(&[0.1, 0.1]);
        assert!(vanishes_at(&p, 0.1));
        assert!(!vanishes_at(&p, 0.1 + 1e-6));
        assert!(vanishes_at(&Polynomial::new([0.0, 1.0]), 0.0));
        assert!(!vanishes_at(&Polynomial::constant(1.0), 0.0));
    }

    #[test]
    fn distant_roots() {
        // (x + 1000)(x - 0.001)(x - 1e6)
        let p = from_roots(&[-1000.0, 0.001, 1e6]);
        let found = p.roots().expect("should solve");
        assert_eq!(found.len(), 3);
        assert_relative_eq!(found[0], -1000.0, max_relative = 1e-12);
        assert_relative_eq!(found[1], 0.001, max_relative = 1e-9);
        assert_relative_eq!(found[2], 1e6, max_relative = 1e-12);
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        let p = Polynomial::new([1.0, f64::NAN, 1.0]);
        assert_eq!(p.roots(), Err(Error::NonFiniteCoefficient));
        let p = Polynomial::new([f64::INFINITY, 1.0]);
        assert!(matches!(
            solve(&p, &Config::default()),
            Err(Error::NonFiniteCoefficient)
        ));
    }

    #[test]
    fn custom_config_is_used() {
        let config = Config::new(realroot_search::Config::default(), 2.0).expect("valid config");
        let found = solve(&Polynomial::new([-8.0, 0.0, 0.0, 1.0]), &config).expect("should solve");
        assert_roots(&found, &[2.0]);
    }

    #[test]
    fn sign_at_infinity_follows_degree_parity() {
        let odd = Polynomial::new([0.0, 0.0, 0.0, 2.0]);
        assert!(sign_at_infinity(&odd, Tail::Below) < 0.0);
        assert!(sign_at_infinity(&odd, Tail::Above) > 0.0);
        let even = Polynomial::new([0.0, 0.0, -1.0]);
        assert!(sign_at_infinity(&even, Tail::Below) < 0.0);
        assert!(sign_at_infinity(&even, Tail::Above) < 0.0);
    }

    #[test]
    fn grown_bracket_finds_far_root() {
        // x - 5000 from the origin needs several expansions.
        let p = Polynomial::new([-5000.0, 1.0]);
        let x = grow_bracket(&p, 0.0, -5000.0, 1.0, &Config::default()).expect("should bracket");
        assert_relative_eq!(x, 5000.0);
    }
}
