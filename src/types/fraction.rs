//! Rational time values

use num_rational::Ratio;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::convert::frames::saturate;

/// A rational number of seconds, `numerator / denominator`.
///
/// Not reduced automatically; equality is structural. Use
/// [`Fraction::is_value_equal`] to compare values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Numerator
    pub numerator: i64,
    /// Denominator
    pub denominator: i64,
}

impl Fraction {
    /// Create a new fraction
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Whether the value is below zero. False when the denominator is zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.to_ratio().is_some_and(|ratio| ratio.is_negative())
    }

    /// Floating-point value. Infinite or NaN when the denominator is zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn double_value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Fully reduced form with a positive denominator.
    ///
    /// Returns `self` unchanged when the denominator is zero.
    #[must_use]
    pub fn reduced(&self) -> Self {
        self.to_ratio().map_or(*self, Self::from)
    }

    /// Divide out common factors of 10 and then 2 only.
    ///
    /// This is a cheap approximation of reduction: `6/3` stays `6/3`.
    #[must_use]
    pub fn reduced_by_common_factors(&self) -> Self {
        let (numerator, denominator) = reduce_by_common_factors(
            i128::from(self.numerator),
            i128::from(self.denominator),
        );
        Self {
            numerator: saturate(numerator),
            denominator: saturate(denominator),
        }
    }

    /// Whether both fractions denote the same value.
    #[must_use]
    pub fn is_value_equal(&self, other: &Self) -> bool {
        i128::from(self.numerator) * i128::from(other.denominator)
            == i128::from(other.numerator) * i128::from(self.denominator)
    }

    /// Exact ratio, or `None` when the denominator is zero.
    #[must_use]
    pub fn to_ratio(&self) -> Option<Ratio<i64>> {
        (self.denominator != 0).then(|| Ratio::new(self.numerator, self.denominator))
    }
}

/// Divide out common factors of 10 and then 2 from a wide fraction.
pub(crate) fn reduce_by_common_factors(mut numerator: i128, mut denominator: i128) -> (i128, i128) {
    for factor in [10, 2] {
        while denominator != 0 && numerator % factor == 0 && denominator % factor == 0 {
            numerator /= factor;
            denominator /= factor;
        }
    }
    (numerator, denominator)
}

impl From<Ratio<i64>> for Fraction {
    fn from(r: Ratio<i64>) -> Self {
        Self::new(*r.numer(), *r.denom())
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
