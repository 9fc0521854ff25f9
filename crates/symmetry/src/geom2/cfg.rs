//! Decimal precision context for exact 2D geometry.
//!
//! - `GeomCfg`: working precision `P` (significant digits). Every arithmetic
//!   step is rounded to `P` digits, half-even.
//! - `GeomCfg::normalize`: canonical form at `P - 1` digits. All Eq/Hash/Display
//!   of `Point` and `Line` go through it.
//!
//! Division into a repeating fraction (e.g. `100/3`) leaves last-digit noise
//! that depends on the order of operations. One digit of headroom absorbs it
//! while numbers that differ above the noise floor still compare unequal.

use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::GeomError;

/// Smallest working precision; normalization needs at least one digit left.
pub const MIN_PRECISION: u64 = 2;
/// Largest working precision; bounds the digit count of every rounded intermediate.
pub const MAX_PRECISION: u64 = 10_000;
/// Working precision used when none is given.
pub const DEFAULT_PRECISION: u64 = 12;

const DEFAULT_PREC: NonZeroU64 = match NonZeroU64::new(DEFAULT_PRECISION) {
    Some(p) => p,
    None => panic!("default precision is non-zero"),
};

/// Precision context (digits of significance) for decimal geometry.
///
/// Passed explicitly into every constructor and arithmetic call. A temporary
/// precision change is a derived value (`narrowed`), so the caller's context
/// is never mutated and needs no restoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeomCfg {
    prec: NonZeroU64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { prec: DEFAULT_PREC }
    }
}

impl GeomCfg {
    pub fn new(prec: u64) -> Result<Self, GeomError> {
        match NonZeroU64::new(prec) {
            Some(prec) if (MIN_PRECISION..=MAX_PRECISION).contains(&prec.get()) => {
                Ok(Self { prec })
            }
            _ => Err(GeomError::InvalidPrecision { prec }),
        }
    }

    #[inline]
    pub fn prec(&self) -> u64 {
        self.prec.get()
    }

    /// Context one digit narrower than `self`, used for comparisons.
    #[inline]
    pub fn narrowed(&self) -> Self {
        NonZeroU64::new(self.prec.get() - 1).map_or(*self, |prec| Self { prec })
    }

    /// `d` rounded to the working precision.
    #[inline]
    pub fn round(&self, d: &BigDecimal) -> BigDecimal {
        d.with_precision_round(self.prec, RoundingMode::HalfEven)
    }

    /// Canonical comparison key: rounded at `P - 1` digits, trailing zeros stripped.
    pub fn normalize(&self, d: &BigDecimal) -> BigDecimal {
        self.narrowed().round(d).normalized()
    }

    /// Exact decimal from a literal such as `"501.000000000000000001"` or `"1e-16"`.
    ///
    /// Parsing is exact; the working precision only applies to later arithmetic.
    pub fn parse(token: &str) -> Result<BigDecimal, GeomError> {
        BigDecimal::from_str(token.trim()).map_err(|_| GeomError::MalformedCoordinate {
            token: token.to_string(),
        })
    }

    #[inline]
    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a + b))
    }

    #[inline]
    pub fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a - b))
    }

    #[inline]
    pub fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a * b))
    }

    /// `a / b` correctly rounded to the working precision.
    ///
    /// Callers guarantee `b != 0`; a zero divisor yields zero.
    pub fn div(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        debug_assert!(!b.is_zero(), "division by zero");
        if a.is_zero() || b.is_zero() {
            return BigDecimal::zero();
        }
        let (an, a_scale) = a.as_bigint_and_exponent();
        let (bn, b_scale) = b.as_bigint_and_exponent();
        // Two guard digits beyond P, then a sticky digit for the remainder, so
        // rounding the truncated quotient matches rounding the exact one.
        let shift = (self.prec() as i64 + 2 + digit_count(&bn) - digit_count(&an)).max(0);
        let num = an * num_traits::pow(BigInt::from(10u8), shift as usize);
        let mut q = &num / &bn;
        let r = &num % &bn;
        let mut scale = a_scale - b_scale + shift;
        if !r.is_zero() {
            let sticky = if num.is_negative() == bn.is_negative() {
                BigInt::from(1u8)
            } else {
                BigInt::from(-1i8)
            };
            q = q * BigInt::from(10u8) + sticky;
            scale += 1;
        }
        self.round(&BigDecimal::new(q, scale))
    }

    /// Rounded sum, accumulated left to right.
    pub fn sum<'a>(&self, values: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
        values
            .into_iter()
            .fold(BigDecimal::zero(), |acc, v| self.add(&acc, v))
    }
}

fn digit_count(n: &BigInt) -> i64 {
    if n.is_zero() {
        1
    } else {
        n.magnitude().to_str_radix(10).len() as i64
    }
}
