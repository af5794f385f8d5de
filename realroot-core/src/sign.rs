/// The sign of a function value for bracket logic.
///
/// Zero is not a sign here: searches test for an exact zero first and only
/// compare signs of nonzero values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is negative.
    Negative,
    /// Value is positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a nonzero, non-NaN value.
    ///
    /// Returns `None` for zero (of either sign) and for NaN.
    #[must_use]
    pub fn of(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Sign::Positive)
        } else if value < 0.0 {
            Some(Sign::Negative)
        } else {
            None
        }
    }

    /// Returns true if `a` and `b` are nonzero with opposite signs.
    #[must_use]
    pub fn differ(a: f64, b: f64) -> bool {
        match (Self::of(a), Self::of(b)) {
            (Some(sa), Some(sb)) => sa != sb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_values() {
        assert_eq!(Sign::of(2.0), Some(Sign::Positive));
        assert_eq!(Sign::of(-1e-300), Some(Sign::Negative));
        assert_eq!(Sign::of(f64::INFINITY), Some(Sign::Positive));
        assert_eq!(Sign::of(0.0), None);
        assert_eq!(Sign::of(-0.0), None);
        assert_eq!(Sign::of(f64::NAN), None);
    }

    #[test]
    fn differ_requires_two_nonzero_opposite_values() {
        assert!(Sign::differ(-1.0, 2.0));
        assert!(Sign::differ(3.0, -0.5));
        assert!(!Sign::differ(1.0, 2.0));
        assert!(!Sign::differ(0.0, 2.0));
        assert!(!Sign::differ(f64::NAN, -2.0));
    }
}
