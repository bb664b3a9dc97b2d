//! Monetary amount type with a not-a-number sentinel for unparseable input.
//!
//! Wraps `f64` so that malformed amount fields contaminate the totals they
//! touch instead of being coerced to zero or aborting an upload. Rounding
//! happens only at display time, fixed to two decimal places.

use std::fmt;
use std::ops::{Add, AddAssign, Div};

/// A signed monetary amount.
///
/// Arithmetic follows IEEE 754: an amount parsed from malformed text is NaN,
/// and any total it participates in becomes NaN as well, which is how
/// corrupted input stays detectable downstream.
///
/// # Examples
///
/// ```
/// use split_engine::Amount;
///
/// let amount = Amount::parse("10.5");
/// assert_eq!(amount.to_string(), "10.50");
///
/// let bad = Amount::parse("abc");
/// assert!(!bad.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(0.0);

    /// The not-a-number sentinel attached to unparseable amount fields.
    pub const NOT_A_NUMBER: Self = Amount(f64::NAN);

    /// Creates an amount from a raw `f64`.
    pub fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Parses an amount from text using standard floating-point rules.
    ///
    /// A parse failure (or empty text) yields the NaN sentinel rather than
    /// an error; the caller attaches it to the transaction as-is.
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(value) => Amount(value),
            Err(_) => Amount::NOT_A_NUMBER,
        }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` if this value is a real number (not the NaN sentinel
    /// or an overflow artifact).
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Even division among `rhs` participants. No rounding is applied here;
/// two-decimal rounding is a display concern.
impl Div<usize> for Amount {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Amount(self.0 / rhs as f64)
    }
}
