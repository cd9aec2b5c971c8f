//! # uq_math::math::full_math
//!
//! Full-precision `floor(a * b / denominator)` over 256-bit words.
//!
//! ## Phantom overflow
//! `a * b` may need up to 512 bits even when the final quotient fits in 256.
//! The product is formed exactly as a `(low, high)` word pair, the remainder is
//! subtracted so the division becomes exact, and the exact division is then
//! carried out as a multiplication by the modular inverse of the (odd part of
//! the) denominator modulo 2^256. No intermediate result is ever truncated.
//!
//! ## Errors
//! - `MathError::DivisionByZero` when `denominator == 0`.
//! - `MathError::Overflow` when the true quotient does not fit in 256 bits.

use crate::error::MathError;
use crate::math::word::{full_mul, mod_512};
use anchor_lang::prelude::*;
use ethnum::U256;

/// Calculates floor(a * b / denominator) with full precision.
#[inline]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    let (quotient, _) = div_rem_512(a, b, denominator)?;
    Ok(quotient)
}

/// Calculates ceil(a * b / denominator) with full precision.
#[inline]
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256> {
    let (quotient, remainder) = div_rem_512(a, b, denominator)?;
    if remainder == U256::ZERO {
        return Ok(quotient);
    }
    require!(quotient < U256::MAX, MathError::Overflow);
    Ok(quotient + U256::ONE)
}

/// Calculates (a * b) mod denominator without truncating the product.
#[inline]
pub fn mul_mod(a: U256, b: U256, denominator: U256) -> Result<U256> {
    require!(denominator != U256::ZERO, MathError::DivisionByZero);

    let (low, high) = full_mul(a, b);
    if high == U256::ZERO {
        return Ok(low % denominator);
    }
    mod_512(low, high, denominator)
}

// Quotient and remainder of the 512-bit product a * b by `denominator`, each
// computed once. The quotient must fit one word.
fn div_rem_512(a: U256, b: U256, denominator: U256) -> Result<(U256, U256)> {
    require!(denominator != U256::ZERO, MathError::DivisionByZero);

    let (prod0, prod1) = full_mul(a, b);

    // Product fits one word: plain division.
    if prod1 == U256::ZERO {
        return Ok((prod0 / denominator, prod0 % denominator));
    }

    // The quotient is < 2^256 iff denominator > prod1.
    if denominator <= prod1 {
        return err!(MathError::Overflow);
    }

    // Make the division exact by subtracting the remainder from [prod1 prod0].
    let remainder = mod_512(prod0, prod1, denominator)?;
    let (prod0, borrow) = prod0.overflowing_sub(remainder);
    let prod1 = if borrow {
        prod1.wrapping_sub(U256::ONE)
    } else {
        prod1
    };

    // Factor the largest power of two out of the denominator.
    let twos = denominator & U256::ZERO.wrapping_sub(denominator);
    let odd = denominator / twos;
    let prod0 = prod0 / twos;

    // Shift bits from prod1 into prod0: flip twos into 2^256 / twos (0 when twos == 1,
    // in which case prod1 contributes nothing mod 2^256).
    let flip = (U256::ZERO.wrapping_sub(twos) / twos).wrapping_add(U256::ONE);
    let prod0 = prod0 | prod1.wrapping_mul(flip);

    // The division is now exact, so dividing is multiplying by the inverse.
    Ok((prod0.wrapping_mul(inverse_mod_2_256(odd)), remainder))
}

// Inverse of an odd `d` modulo 2^256 by Newton-Hensel lifting. The seed
// (3 * d) ^ 2 is correct to four bits and every step doubles the correct bits:
// 8, 16, 32, 64, 128, 256.
#[inline(always)]
fn inverse_mod_2_256(d: U256) -> U256 {
    let two = U256::new(2);
    let mut inv = U256::new(3).wrapping_mul(d) ^ two;
    for _ in 0..6 {
        inv = inv.wrapping_mul(two.wrapping_sub(d.wrapping_mul(inv)));
    }
    inv
}
