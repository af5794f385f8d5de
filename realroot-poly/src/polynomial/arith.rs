//! Operator impls for [`Polynomial`].
//!
//! Each binary operator is written once for references and forwarded for
//! the owned combinations. Scalars on the right offset, scale or divide the
//! polynomial.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use super::Polynomial;

impl<T: Float> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        zip_longest(&self.coeffs, &rhs.coeffs, |a, b| a + b)
    }
}

impl<T: Float> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        zip_longest(&self.coeffs, &rhs.coeffs, |a, b| a - b)
    }
}

impl<T: Float> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut coeffs = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Polynomial::from_vec(coeffs)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl<T: Float> $imp<Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Float> $imp<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Float> $imp<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<T: Float> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}

impl<T: Float> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<T: Float> Add<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, k: T) -> Polynomial<T> {
        offset(self, k)
    }
}

impl<T: Float> Add<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, k: T) -> Polynomial<T> {
        &self + k
    }
}

impl<T: Float> Sub<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, k: T) -> Polynomial<T> {
        offset(self, -k)
    }
}

impl<T: Float> Sub<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, k: T) -> Polynomial<T> {
        &self - k
    }
}

impl<T: Float> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, k: T) -> Polynomial<T> {
        self.scale(k)
    }
}

impl<T: Float> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, k: T) -> Polynomial<T> {
        self.scale(k)
    }
}

impl<T: Float> Div<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, k: T) -> Polynomial<T> {
        Polynomial::from_vec(self.coeffs.iter().map(|&c| c / k).collect())
    }
}

impl<T: Float> Div<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, k: T) -> Polynomial<T> {
        &self / k
    }
}

fn offset<T: Float>(p: &Polynomial<T>, k: T) -> Polynomial<T> {
    let mut coeffs = p.coeffs.clone();
    coeffs[0] = coeffs[0] + k;
    Polynomial::from_vec(coeffs)
}

fn zip_longest<T: Float>(a: &[T], b: &[T], op: impl Fn(T, T) -> T) -> Polynomial<T> {
    let len = a.len().max(b.len());
    let at = |c: &[T], i: usize| c.get(i).copied().unwrap_or_else(T::zero);
    Polynomial::from_vec((0..len).map(|i| op(at(a, i), at(b, i))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_pad_the_shorter_operand() {
        let p = Polynomial::new([1.0, 2.0, 3.0]);
        let q = Polynomial::new([4.0, -2.0]);
        assert_eq!((&p + &q).coeffs(), &[5.0, 0.0, 3.0]);
        assert_eq!((&q - &p).coeffs(), &[3.0, -4.0, -3.0]);
        assert_eq!((p.clone() + q.clone()), (&q + &p));
    }

    #[test]
    fn cancelling_leading_terms_lowers_degree() {
        let p = Polynomial::new([1.0, 1.0, 1.0]);
        let q = Polynomial::new([0.0, 0.0, 1.0]);
        let diff = &p - &q;
        assert_eq!(diff.degree(), Some(1));
        assert!((&p - &p).is_zero());
    }

    #[test]
    fn multiplies_by_polynomial_and_scalar() {
        // (x - 1)(x + 1) = x^2 - 1
        let product = Polynomial::new([-1.0, 1.0]) * Polynomial::new([1.0, 1.0]);
        assert_eq!(product.coeffs(), &[-1.0, 0.0, 1.0]);
        assert_eq!((&product * 2.0).coeffs(), &[-2.0, 0.0, 2.0]);
        assert_eq!((product / 4.0).coeffs(), &[-0.25, 0.0, 0.25]);
        assert!((Polynomial::new([1.0, 1.0]) * Polynomial::zero()).is_zero());
    }

    #[test]
    fn negation_flips_every_sign() {
        let p = Polynomial::new([1.0, -2.0, 3.0]);
        assert_eq!((-&p).coeffs(), &[-1.0, 2.0, -3.0]);
        assert_eq!(-(-p.clone()), p);
    }

    #[test]
    fn scalar_offsets_move_the_constant_term() {
        let p = Polynomial::new([1.0, -2.0, 3.0]);
        assert_eq!((&p + 2.5).coeffs(), &[3.5, -2.0, 3.0]);
        assert_eq!((p.clone() - 1.0).coeffs(), &[0.0, -2.0, 3.0]);
        assert_eq!(Polynomial::<f64>::zero() + 4.0, Polynomial::constant(4.0));
        assert!((Polynomial::constant(2.0) - 2.0).is_zero());
    }
}
