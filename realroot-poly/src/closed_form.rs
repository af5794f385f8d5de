//! Closed-form roots for polynomials of degree three and below.
//!
//! Each function takes coefficients constant term first, like
//! [`Polynomial::new`](crate::Polynomial::new), and returns the distinct real
//! roots in ascending order. A zero leading coefficient falls through to the
//! formula one degree lower.
//!
//! The quadratic and cubic formulas compare their discriminants against zero
//! with a tolerance scaled to the terms that formed them, so a double or
//! triple root rounded slightly off still comes back as one root. The isolator
//! in [`solve`](crate::solve()) only uses the linear and quadratic formulas.

/// Relative tolerance for the cubic discriminant tests.
const CUBIC_TOL: f64 = 64.0 * f64::EPSILON;

/// Root of `c1 x + c0`.
///
/// Returns no roots when `c1` is zero, including for the zero polynomial.
#[must_use]
pub fn solve_linear([c0, c1]: [f64; 2]) -> Vec<f64> {
    if c1 == 0.0 {
        return Vec::new();
    }
    vec![-c0 / c1]
}

/// Roots of `c2 x^2 + c1 x + c0`.
///
/// Uses the cancellation-free form `q = -(c1 + sign(c1) sqrt(disc)) / 2`
/// with roots `q / c2` and `c0 / q`. The coefficients are first divided by a
/// power of two near the largest of them, so the discriminant cannot overflow.
#[must_use]
pub fn solve_quadratic([c0, c1, c2]: [f64; 3]) -> Vec<f64> {
    if c2 == 0.0 {
        return solve_linear([c0, c1]);
    }

    let unit = binade(c0.abs().max(c1.abs()).max(c2.abs()));
    let (c0, c1, c2) = (c0 / unit, c1 / unit, c2 / unit);

    let square = c1 * c1;
    let product = 4.0 * c2 * c0;
    let disc = square - product;
    if disc.is_nan() {
        return Vec::new();
    }
    if disc.abs() <= 4.0 * f64::EPSILON * (square + product.abs()) {
        return vec![-c1 / (2.0 * c2)];
    }
    if disc < 0.0 {
        return Vec::new();
    }

    let q = -0.5 * (c1 + disc.sqrt().copysign(c1));
    sorted(vec![q / c2, c0 / q])
}

/// Roots of `c3 x^3 + c2 x^2 + c1 x + c0` by Cardano's method.
///
/// The cubic is depressed to `t^3 + p t + q` with `x = t - c2 / (3 c3)`.
/// Three real roots come from the trigonometric form of the cube root. When
/// `p` and `q` both vanish the root is triple, and when only the discriminant
/// does the double root is `-3q / (2p)`, each up to rounding.
#[must_use]
pub fn cardano([c0, c1, c2, c3]: [f64; 4]) -> Vec<f64> {
    if c3 == 0.0 {
        return solve_quadratic([c0, c1, c2]);
    }

    let (a, b, c, d) = (c3, c2, c1, c0);
    let k = b / (3.0 * a);
    let p = (c - b * k) / a;
    let q = (k * (2.0 * b * k - 3.0 * c) + 3.0 * d) / (3.0 * a);
    let half_q = -0.5 * q;
    let cube = p * p * p / 27.0;
    let m = half_q * half_q + cube;

    let p_scale = (c.abs() + (b * k).abs()) / a.abs();
    let q_scale =
        ((2.0 * b * k * k).abs() + (3.0 * c * k).abs() + (3.0 * d).abs()) / (3.0 * a).abs();

    let roots = if p.abs() <= CUBIC_TOL * p_scale && q.abs() <= CUBIC_TOL * q_scale {
        vec![-k]
    } else if m.abs() <= CUBIC_TOL * (half_q * half_q + cube.abs()) {
        vec![3.0 * q / p - k, -1.5 * q / p - k]
    } else if m > 0.0 {
        let s = m.sqrt();
        vec![(half_q + s).cbrt() + (half_q - s).cbrt() - k]
    } else {
        let h = (-m).sqrt();
        let r = h.hypot(half_q).cbrt();
        let g = h.atan2(half_q) / 3.0;
        let (sin, cos) = g.sin_cos();
        let (i, j) = (r * cos, r * sin * 3.0_f64.sqrt());
        vec![2.0 * i - k, -i + j - k, -i - j - k]
    };
    sorted(roots)
}

/// Roots of `c3 x^3 + c2 x^2 + c1 x + c0` by Shengjin's formulas.
///
/// Works from the discriminants `A = b^2 - 3ac`, `B = bc - 9ad` and
/// `C = c^2 - 3bd`, avoiding the change of variable. Each discriminant counts
/// as zero when it is small next to the products it was formed from.
#[must_use]
pub fn shengjin([c0, c1, c2, c3]: [f64; 4]) -> Vec<f64> {
    if c3 == 0.0 {
        return solve_quadratic([c0, c1, c2]);
    }

    let (a, b, c, d) = (c3, c2, c1, c0);
    let big_a = b * b - 3.0 * a * c;
    let big_b = b * c - 9.0 * a * d;
    let big_c = c * c - 3.0 * b * d;
    let disc = big_b * big_b - 4.0 * big_a * big_c;

    let triple = big_a.abs() <= CUBIC_TOL * (b * b + (3.0 * a * c).abs())
        && big_b.abs() <= CUBIC_TOL * ((b * c).abs() + (9.0 * a * d).abs());

    let roots = if triple {
        vec![-b / (3.0 * a)]
    } else if disc.abs() <= CUBIC_TOL * (big_b * big_b + (4.0 * big_a * big_c).abs()) {
        let k = big_b / big_a;
        vec![-b / a + k, -0.5 * k]
    } else if disc > 0.0 {
        let s = disc.sqrt();
        let y1 = big_a * b + 1.5 * a * (-big_b + s);
        let y2 = big_a * b + 1.5 * a * (-big_b - s);
        vec![(-b - y1.cbrt() - y2.cbrt()) / (3.0 * a)]
    } else {
        // disc < 0 forces A > 0.
        let t = (2.0 * big_a * b - 3.0 * a * big_b) / (2.0 * big_a * big_a.sqrt());
        let t = t.clamp(-1.0, 1.0);
        let theta = t.acos() / 3.0;
        let root_a = big_a.sqrt();
        let (sin, cos) = theta.sin_cos();
        let shift = 3.0_f64.sqrt() * sin;
        vec![
            (-b - 2.0 * root_a * cos) / (3.0 * a),
            (-b + root_a * (cos + shift)) / (3.0 * a),
            (-b + root_a * (cos - shift)) / (3.0 * a),
        ]
    };
    sorted(roots)
}

/// Largest power of two not above `x`, for finite positive `x`.
///
/// Dividing by it rescales coefficients without rounding.
pub(crate) fn binade(x: f64) -> f64 {
    x.log2().floor().min(f64::from(f64::MAX_EXP - 1)).exp2()
}

fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
    roots.sort_by(f64::total_cmp);
    roots.dedup();
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots {actual:?}, expected {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn linear() {
        assert_eq!(solve_linear([-3.0, 2.0]), vec![1.5]);
        assert!(solve_linear([1.0, 0.0]).is_empty());
        assert!(solve_linear([0.0, 0.0]).is_empty());
    }

    #[test]
    fn quadratic_with_two_roots() {
        assert_eq!(solve_quadratic([2.0, -3.0, 1.0]), vec![1.0, 2.0]);
        assert_eq!(solve_quadratic([0.0, -3.0, 1.0]), vec![0.0, 3.0]);
        assert_eq!(solve_quadratic([-4.0, 0.0, 1.0]), vec![-2.0, 2.0]);
    }

    #[test]
    fn quadratic_double_and_missing_roots() {
        assert_eq!(solve_quadratic([1.0, -2.0, 1.0]), vec![1.0]);
        assert!(solve_quadratic([1.0, 0.0, 1.0]).is_empty());
        assert_eq!(solve_quadratic([-3.0, 2.0, 0.0]), vec![1.5]);
    }

    #[test]
    fn quadratic_keeps_small_root_accurate() {
        // x^2 - 1e8 x + 1 has roots near 1e8 and 1e-8.
        let roots = solve_quadratic([1.0, -1e8, 1.0]);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1e-8, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 1e8, max_relative = 1e-12);
    }

    #[test]
    fn quadratic_with_huge_middle_coefficient() {
        // x^2 + 1e200 x + 1 squares its middle coefficient past f64::MAX.
        let roots = solve_quadratic([1.0, 1e200, 1.0]);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -1e200, max_relative = 1e-12);
        assert_relative_eq!(roots[1], -1e-200, max_relative = 1e-12);
    }

    #[test]
    fn quadratic_rounded_double_root() {
        // (x - 0.3)^2 has no exact binary coefficients.
        let roots = solve_quadratic([0.09, -0.6, 1.0]);
        assert_roots(&roots, &[0.3]);
    }

    #[test]
    fn cubic_with_three_roots() {
        let coeffs = [-6.0, 11.0, -6.0, 1.0];
        assert_roots(&cardano(coeffs), &[1.0, 2.0, 3.0]);
        assert_roots(&shengjin(coeffs), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn cubic_with_one_root() {
        // x^3 + x + 1
        let expected = [-0.682_327_803_828_019_3];
        assert_roots(&cardano([1.0, 1.0, 0.0, 1.0]), &expected);
        assert_roots(&shengjin([1.0, 1.0, 0.0, 1.0]), &expected);
    }

    #[test]
    fn cubic_with_double_root() {
        // x^3 - 3x + 2 = (x - 1)^2 (x + 2)
        let coeffs = [2.0, -3.0, 0.0, 1.0];
        assert_roots(&cardano(coeffs), &[-2.0, 1.0]);
        assert_roots(&shengjin(coeffs), &[-2.0, 1.0]);
    }

    #[test]
    fn cubic_with_triple_root() {
        // (x - 2)^3 = x^3 - 6x^2 + 12x - 8
        let coeffs = [-8.0, 12.0, -6.0, 1.0];
        assert_eq!(shengjin(coeffs), vec![2.0]);
        assert_roots(&cardano(coeffs), &[2.0]);
        assert_eq!(shengjin([0.0, 0.0, 0.0, 3.0]), vec![0.0]);
    }

    /// Coefficients of the monic cubic with the given roots.
    fn cubic_from_roots([r, s, t]: [f64; 3]) -> [f64; 4] {
        [-r * s * t, r * s + r * t + s * t, -(r + s + t), 1.0]
    }

    #[test]
    fn cubic_with_rounded_double_root() {
        let coeffs = cubic_from_roots([0.1, 0.1, 3.0]);
        assert_roots(&cardano(coeffs), &[0.1, 3.0]);
        assert_roots(&shengjin(coeffs), &[0.1, 3.0]);

        let coeffs = cubic_from_roots([-0.3, -0.3, 2.0]);
        assert_roots(&cardano(coeffs), &[-0.3, 2.0]);
        assert_roots(&shengjin(coeffs), &[-0.3, 2.0]);
    }

    #[test]
    fn cubic_with_rounded_triple_root() {
        let coeffs = cubic_from_roots([0.1, 0.1, 0.1]);
        assert_roots(&cardano(coeffs), &[0.1]);
        assert_roots(&shengjin(coeffs), &[0.1]);

        let third = 1.0 / 3.0;
        let coeffs = cubic_from_roots([third, third, third]);
        assert_roots(&cardano(coeffs), &[third]);
        assert_roots(&shengjin(coeffs), &[third]);
    }

    #[test]
    fn cubic_with_close_distinct_roots() {
        let coeffs = cubic_from_roots([0.2, 0.5, 0.9]);
        assert_roots(&cardano(coeffs), &[0.2, 0.5, 0.9]);
        assert_roots(&shengjin(coeffs), &[0.2, 0.5, 0.9]);
    }

    #[test]
    fn cubic_falls_back_to_quadratic() {
        assert_eq!(cardano([2.0, -3.0, 1.0, 0.0]), vec![1.0, 2.0]);
        assert_eq!(shengjin([2.0, -3.0, 1.0, 0.0]), vec![1.0, 2.0]);
    }
}
