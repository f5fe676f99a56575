//! Exact decimal helpers shared by the economy and combat code.
//!
//! Everything that scales (EXP thresholds, rod stats, costs) is a power of
//! ten or a small integer factor, so these helpers build values from integer
//! parts and never go through floating point.

use bigdecimal::BigDecimal;

/// Builds `mantissa * 10^exponent` exactly.
pub fn sci(mantissa: i64, exponent: i64) -> BigDecimal {
    BigDecimal::new(mantissa.into(), -exponent)
}

/// `10^exponent`.
pub fn pow10(exponent: u32) -> BigDecimal {
    sci(1, i64::from(exponent))
}

/// `tenths / 10`, e.g. `tenths(15)` is 1.5.
pub fn tenths(tenths: i64) -> BigDecimal {
    BigDecimal::new(tenths.into(), 1)
}

/// Triangular number T(n) = n * (n - 1) / 2.
///
/// Used as the attack power multiplier on level-up: T(2) = 1, T(3) = 3,
/// T(4) = 6 and so on.
pub fn triangular(n: u32) -> u64 {
    let n = u64::from(n);
    n * n.saturating_sub(1) / 2
}

/// Rate-per-second times elapsed seconds.
pub fn accrued(rate: &BigDecimal, seconds: u64) -> BigDecimal {
    rate * &BigDecimal::from(seconds)
}
