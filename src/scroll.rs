//! Definitions of the scroll speed, a complex number which scales and rotates the note motion.
//!
//! The text form is the one written after `#SCROLL`:
//!
//! | value       | text     |
//! |-------------|----------|
//! | `0 + 0i`    | `0`      |
//! | `1.5 + 0i`  | `1.5`    |
//! | `0 + 1i`    | `1i`     |
//! | `-2 - 2i`   | `-2-2i`  |

use std::{
    fmt,
    ops::{Mul, MulAssign},
    str::FromStr,
    sync::LazyLock,
};

use num::Complex;
use regex::Regex;

use crate::{
    error::{ChartError, Result},
    text::{named, pull_out},
};

// Alternatives are tried in order at the leftmost position, so `1i` is not read as the real `1`.
static COMPLEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<real>[+-]?\d+(?:\.\d*)?)(?P<imaginary>[+-]\d+(?:\.\d*)?)i",
        r"|(?P<imaginary_only>[+-]?\d+(?:\.\d*)?)i",
        r"|(?P<real_only>[+-]?\d+(?:\.\d*)?)",
    ))
    .expect("the complex number pattern is valid")
});

/// A scroll speed of the note. The real part is the speed along the lane and the imaginary part is across it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSpeed(Complex<f64>);

impl ScrollSpeed {
    /// The speed which does not change anything, `1`.
    pub const NORMAL: Self = Self::new(1.0, 0.0);
    /// The speed which stops the notes, `0`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new scroll speed from its components.
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self(Complex::new(real, imaginary))
    }

    /// The real component.
    #[must_use]
    pub const fn real(self) -> f64 {
        self.0.re
    }

    /// The imaginary component.
    #[must_use]
    pub const fn imaginary(self) -> f64 {
        self.0.im
    }

    /// Parses the text form such as `1`, `1i`, `-1.5+2i`.
    ///
    /// The first number found in the text is taken, and anything around it is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Format`] if the text has neither the real part nor the imaginary part.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let parts = pull_out(text, &COMPLEX_PATTERN, |caps| {
            (
                named(caps, "real").or_else(|| named(caps, "real_only")),
                named(caps, "imaginary").or_else(|| named(caps, "imaginary_only")),
            )
        });
        let (real, imaginary) = match parts {
            Some((None, None)) | None => {
                return Err(ChartError::format(format!(
                    "`{text}` is not a scroll speed"
                )));
            }
            Some(parts) => parts,
        };
        let component = |part: Option<&str>| -> Result<f64> {
            part.map_or(Ok(0.0), |part| {
                part.parse()
                    .map_err(|_| ChartError::format(format!("`{part}` is not a number")))
            })
        };
        Ok(Self::new(component(real)?, component(imaginary)?))
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for ScrollSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex { re, im } = self.0;
        match (re == 0.0, im == 0.0) {
            (true, true) => write!(f, "0"),
            (_, true) => write!(f, "{re}"),
            (true, false) => write!(f, "{im}i"),
            (false, false) if im > 0.0 => write!(f, "{re}+{im}i"),
            (false, false) => write!(f, "{re}{im}i"),
        }
    }
}

impl FromStr for ScrollSpeed {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Mul for ScrollSpeed {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl MulAssign for ScrollSpeed {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl From<Complex<f64>> for ScrollSpeed {
    fn from(value: Complex<f64>) -> Self {
        Self(value)
    }
}

impl From<ScrollSpeed> for Complex<f64> {
    fn from(value: ScrollSpeed) -> Self {
        value.0
    }
}

impl From<f64> for ScrollSpeed {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}
