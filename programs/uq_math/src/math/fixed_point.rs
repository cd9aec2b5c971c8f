//! # uq_math::math::fixed_point
//!
//! Unsigned binary fixed-point numbers with 112 fractional bits.
//!
//! ## Formats
//! - UQ112x112: raw value < 2^224, 112 integer bits. Produced by `encode`,
//!   `muluq`, `divuq`, `fraction`, `reciprocal` and `sqrt`.
//! - UQ144x112: raw value uses the whole word, 144 integer bits. Produced by
//!   `encode144` and `mul`.
//!
//! Both formats share the `UQ112x112` wrapper; the raw word carries no width
//! tag, so callers pick `decode` or `decode144` to match the producer.
//!
//! ## Determinism
//! Integer-only arithmetic, floor division everywhere, every overflow
//! reported as `MathError::Overflow`. No operation performs I/O; the anchor
//! error carries the code and the source location of the rejection.

use crate::error::MathError;
use crate::math::babylonian;
use crate::math::bit_math::most_significant_bit;
use crate::math::full_math::mul_div;
use crate::math::word::{checked_add, checked_mul};
use crate::utils::constants::{
    LOWER_MASK, MAX_U112, MAX_U144, MAX_U224, Q112, Q224, RESOLUTION, SIGNED_MAGNITUDE_LIMIT,
};
use anchor_lang::prelude::*;
use ethnum::{I256, U256};

#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A fixed-point number interpreted as `raw / 2^112`.
pub struct UQ112x112(U256);

impl UQ112x112 {
    pub const RESOLUTION: u32 = RESOLUTION;

    #[inline(always)]
    pub const fn raw(self) -> U256 {
        self.0
    }

    #[inline(always)]
    pub const fn from_raw(v: U256) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self(U256::ZERO)
    }

    #[inline(always)]
    pub const fn one() -> Self {
        Self(Q112)
    }

    /// Encodes a 112-bit integer as a UQ112x112.
    #[inline]
    pub fn encode(x: u128) -> Result<Self> {
        let x = U256::from(x);
        if x > MAX_U112 {
            return err!(MathError::InvalidDomain);
        }
        Ok(Self(x << RESOLUTION))
    }

    /// Encodes a 144-bit integer as a UQ144x112.
    #[inline]
    pub fn encode144(x: U256) -> Result<Self> {
        if x > MAX_U144 {
            return err!(MathError::InvalidDomain);
        }
        Ok(Self(x << RESOLUTION))
    }

    /// Integer part of a UQ112x112. Rejects raw values of 2^224 and above.
    #[inline]
    pub fn decode(self) -> Result<u128> {
        if self.0 > MAX_U224 {
            return err!(MathError::Overflow);
        }
        Ok((self.0 >> RESOLUTION).as_u128())
    }

    /// Integer part of a UQ144x112.
    #[inline]
    pub fn decode144(self) -> U256 {
        self.0 >> RESOLUTION
    }

    /// Multiplies by an unsigned integer, returning a UQ144x112.
    #[inline]
    pub fn mul(self, y: U256) -> Result<Self> {
        Ok(Self(checked_mul(self.0, y)?))
    }

    /// Multiplies by a signed integer and decodes, returning a signed integer.
    ///
    /// The magnitude is floored (the result truncates toward zero) and must stay
    /// below 2^255, so `I256::MIN` is never produced.
    #[inline]
    pub fn muli(self, y: I256) -> Result<I256> {
        let z = mul_div(self.0, y.unsigned_abs(), Q112)?;
        if z >= SIGNED_MAGNITUDE_LIMIT {
            return err!(MathError::Overflow);
        }
        let z = z.as_i256();
        Ok(if y < I256::ZERO { -z } else { z })
    }

    /// Multiplies two UQ112x112 values.
    ///
    /// Each operand is split into an integer half (upper) and a fractional half
    /// (lower); the four partial products are recombined at their own scale, so
    /// the 448-bit product r1 * r2 is never formed. The lowest 112 bits of
    /// lower * lower are dropped, matching a floor of the exact product.
    pub fn muluq(self, other: Self) -> Result<Self> {
        if self.0 == U256::ZERO || other.0 == U256::ZERO {
            return Ok(Self::zero());
        }

        let upper_self = self.0 >> RESOLUTION; // * 2^0
        let lower_self = self.0 & LOWER_MASK; // * 2^-112
        let upper_other = other.0 >> RESOLUTION; // * 2^0
        let lower_other = other.0 & LOWER_MASK; // * 2^-112

        let upper = checked_mul(upper_self, upper_other)?; // * 2^0
        let lower = lower_self * lower_other; // * 2^-224
        let uppers_lowero = checked_mul(upper_self, lower_other)?; // * 2^-112
        let uppero_lowers = checked_mul(upper_other, lower_self)?; // * 2^-112

        // so the shift back to 2^-112 does not overflow
        if upper > MAX_U112 {
            return err!(MathError::Overflow);
        }

        let sum = checked_add(upper << RESOLUTION, uppers_lowero)?;
        let sum = checked_add(sum, uppero_lowers)?;
        let sum = checked_add(sum, lower >> RESOLUTION)?;

        if sum > MAX_U224 {
            return err!(MathError::Overflow);
        }

        Ok(Self(sum))
    }

    /// Divides two UQ112x112 values with full 112-bit fractional precision.
    pub fn divuq(self, other: Self) -> Result<Self> {
        if other.0 == U256::ZERO {
            return err!(MathError::DivisionByZero);
        }
        if self.0 == other.0 {
            return Ok(Self::one());
        }

        // (r1 << 112) fits one word
        if self.0 <= MAX_U144 {
            let value = (self.0 << RESOLUTION) / other.0;
            if value > MAX_U224 {
                return err!(MathError::Overflow);
            }
            return Ok(Self(value));
        }

        let integer = self.0 / other.0;
        if integer > MAX_U112 {
            return err!(MathError::Overflow);
        }

        Ok(Self((integer << RESOLUTION) | long_division_fraction(self.0 % other.0, other.0)))
    }

    /// Builds the UQ112x112 closest below `numerator / denominator`.
    pub fn fraction(numerator: U256, denominator: U256) -> Result<Self> {
        if denominator == U256::ZERO {
            return err!(MathError::DivisionByZero);
        }
        if numerator == U256::ZERO {
            return Ok(Self::zero());
        }

        let result = if numerator <= MAX_U144 {
            (numerator << RESOLUTION) / denominator
        } else {
            mul_div(numerator, Q112, denominator)?
        };

        if result > MAX_U224 {
            return err!(MathError::Overflow);
        }
        Ok(Self(result))
    }

    /// Lossy reciprocal, floor(2^224 / raw).
    #[inline]
    pub fn reciprocal(self) -> Result<Self> {
        if self.0 == U256::ZERO {
            return err!(MathError::DivisionByZero);
        }
        if self.0 == U256::ONE {
            return err!(MathError::Overflow);
        }
        Ok(Self(Q224 / self.0))
    }

    /// Square root of a UQ112x112. Always `Ok`; the `Result` only mirrors the
    /// other operators.
    ///
    /// Exact (floor) while `raw << 112` fits a word, i.e. up to raw = 2^144 - 1.
    /// Above that the input is shifted left only as far as it safely can (an
    /// even number of bits) and the root is shifted back up, so the lowest
    /// `(112 - shift) / 2` bits of the result are always zero. Between 1 and 40
    /// bits are lost for UQ112x112 inputs; callers rely on these exact bits.
    pub fn sqrt(self) -> Result<Self> {
        if self.0 <= MAX_U144 {
            return Ok(Self(babylonian::sqrt(self.0 << RESOLUTION)));
        }

        let mut safe_shift_bits = 255 - u32::from(most_significant_bit(self.0)?);
        safe_shift_bits -= safe_shift_bits % 2;
        let root = babylonian::sqrt(self.0 << safe_shift_bits);
        Ok(Self(root << ((RESOLUTION - safe_shift_bits) / 2)))
    }
}

// Fractional bits of remainder / divisor, one bit per step, most significant
// first. Stops as soon as the remainder is exhausted; bits past 2^-112 are
// truncated. A doubling that carries out of the word is always >= divisor.
fn long_division_fraction(mut remainder: U256, divisor: U256) -> U256 {
    let mut fraction = U256::ZERO;
    for bit in (0..RESOLUTION).rev() {
        if remainder == U256::ZERO {
            break;
        }
        let carry = remainder.leading_zeros() == 0;
        remainder = remainder << 1u32;
        if carry || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            fraction = fraction | (U256::ONE << bit);
        }
    }
    fraction
}
