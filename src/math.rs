//! Mathematical utilities for the chart timing: integer divisors and the time signature fraction.

use std::fmt;

use crate::error::{ChartError, Result};

/// Calculates the greatest common divisor of two numbers using Euclid's algorithm.
///
/// Signs are ignored, and `gcd(x, 0)` is `|x|`. The only divisor not fitting in `i64` is
/// `2^63`, of `gcd(i64::MIN, 0)` and `gcd(i64::MIN, i64::MIN)`, which wraps into `i64::MIN`.
#[must_use]
pub const fn gcd(x: i64, y: i64) -> i64 {
    let (mut x, mut y) = (x.unsigned_abs(), y.unsigned_abs());
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x as i64
}

/// Calculates the least common multiple of two numbers, or returns `None` if it overflows `i64`.
#[must_use]
pub const fn lcm(x: i64, y: i64) -> Option<i64> {
    if x == 0 || y == 0 {
        return Some(0);
    }
    match (x / gcd(x, y)).checked_mul(y) {
        Some(multiple) => multiple.checked_abs(),
        None => None,
    }
}

/// An exact fraction, used as the time signature of a measure. `#MEASURE 3/4` is `3/4`.
///
/// It is kept as written, so `2/4` and `1/2` are different fractions having the same [`Fraction::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// The common time, `4/4`.
    pub const COMMON_TIME: Self = Self::new(4, 4);

    /// Creates a new fraction. The denominator is not checked here, see [`Fraction::reduce`].
    #[must_use]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The numerator as written.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// The denominator as written.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Evaluates the fraction as a floating point number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns the equivalent fraction divided by the greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::DivideByZero`] if the denominator is zero.
    pub fn reduce(self) -> Result<Self> {
        if self.denominator == 0 {
            return Err(ChartError::DivideByZero {
                numerator: self.numerator,
            });
        }
        let divisor = gcd(self.numerator, self.denominator);
        Ok(Self::new(
            self.numerator / divisor,
            self.denominator / divisor,
        ))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::COMMON_TIME
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}
