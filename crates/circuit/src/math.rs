//! Fixed-point arithmetic in the circuit's 248-bit working width.
//!
//! Every operation here is the software image of a constrained circuit
//! operation: the result is range-checked against [`MAX_BITS`] and division
//! returns both quotient and remainder, so that `a = q * b + r` with `r < b`.
//!
//! Formulas always multiply before they divide. Division truncates toward
//! zero, matching Solidity's unsigned integer division.
//!
//! Conditionals are expressed with [`Bit`] and [`select`]: both candidates are
//! computed and one is kept by masking, never by skipping work.

use alloy_primitives::U256;

use crate::error::{CircuitError, Result};

/// Working width of every intermediate value, in bits
pub const MAX_BITS: usize = 248;

/// Scale of Comet's base supply/borrow indices (1e15)
pub const BASE_INDEX_SCALE: U256 = U256::from_limbs([1_000_000_000_000_000, 0, 0, 0]);

/// Scale of utilization and rate factors (1e18)
pub const FACTOR_SCALE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Seconds per year, used to annualize per-second rates
pub const SECONDS_PER_YEAR: U256 = U256::from_limbs([31_536_000, 0, 0, 0]);

/// The constant one
pub const ONE: U256 = U256::from_limbs([1, 0, 0, 0]);

/// A boolean circuit value, always 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit(bool);

impl Bit {
    /// The false bit
    pub const ZERO: Self = Self(false);
    /// The true bit
    pub const ONE: Self = Self(true);

    /// Returns true if the bit is set
    pub fn is_set(self) -> bool {
        self.0
    }

    /// The bit as an integer (0 or 1), for use as a multiplicative mask
    pub fn value(self) -> U256 {
        if self.0 {
            ONE
        } else {
            U256::ZERO
        }
    }

    /// Logical negation, `1 - bit`
    pub fn negate(self) -> Self {
        Self(!self.0)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// Range-check a value against the working width
pub fn bounded(op: &'static str, value: U256) -> Result<U256> {
    if value.bit_len() > MAX_BITS {
        return Err(CircuitError::Overflow {
            op,
            max_bits: MAX_BITS,
        });
    }
    Ok(value)
}

/// Checked addition in the working width
pub fn add(a: U256, b: U256) -> Result<U256> {
    let sum = a.checked_add(b).ok_or(CircuitError::Overflow {
        op: "add",
        max_bits: MAX_BITS,
    })?;
    bounded("add", sum)
}

/// Checked subtraction; fails when `b > a`.
///
/// Part of the arithmetic surface for callers building their own curves. The
/// supply rate pipeline clamps with [`zero_floor_sub`] instead.
pub fn sub(a: U256, b: U256) -> Result<U256> {
    a.checked_sub(b)
        .ok_or(CircuitError::Underflow { lhs: a, rhs: b })
}

/// Subtraction clamped at zero: `max(a - b, 0)`
pub fn zero_floor_sub(a: U256, b: U256) -> U256 {
    a.saturating_sub(b)
}

/// Checked multiplication in the working width
pub fn mul(a: U256, b: U256) -> Result<U256> {
    let product = a.checked_mul(b).ok_or(CircuitError::Overflow {
        op: "mul",
        max_bits: MAX_BITS,
    })?;
    bounded("mul", product)
}

/// Truncating division returning `(quotient, remainder)`.
///
/// Callers must never reach this with a zero divisor on live data; the zero
/// case is guarded upstream with [`select`]. It is still reported as
/// [`CircuitError::DivisionByZero`] rather than panicking.
pub fn div_rem(a: U256, b: U256) -> Result<(U256, U256)> {
    if b.is_zero() {
        return Err(CircuitError::DivisionByZero);
    }
    let a = bounded("div", a)?;
    let b = bounded("div", b)?;
    Ok(a.div_rem(b))
}

/// `floor(a * b / divisor)` with a full-width intermediate product
pub fn mul_div_down(a: U256, b: U256, divisor: U256) -> Result<U256> {
    let (quotient, _) = div_rem(mul(a, b)?, divisor)?;
    Ok(quotient)
}

/// `floor(n * factor / FACTOR_SCALE)`
pub fn w_mul_down(n: U256, factor: U256) -> Result<U256> {
    mul_div_down(n, factor, FACTOR_SCALE)
}

/// Returns 1 if `value` is zero, 0 otherwise
pub fn is_zero(value: U256) -> Bit {
    Bit::from(value.is_zero())
}

/// Returns 1 if `a > b` (strict, unsigned), 0 otherwise
pub fn is_greater_than(a: U256, b: U256) -> Bit {
    Bit::from(a > b)
}

/// Oblivious select: `bit * if_true + (1 - bit) * if_false`.
///
/// Both candidates must already be computed by the caller.
pub fn select(bit: Bit, if_true: U256, if_false: U256) -> Result<U256> {
    let kept_true = mul(bit.value(), if_true)?;
    let kept_false = mul(bit.negate().value(), if_false)?;
    add(kept_true, kept_false)
}
