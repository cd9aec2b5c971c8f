//! # uq_math::math::word
//!
//! 256-bit word primitives shared by every other math module.
//!
//! Words are `ethnum::U256`. What their plain operators do on overflow depends
//! on the build profile, so everything that can overflow on caller input goes
//! through the checked helpers here and surfaces `MathError::Overflow`.
//! The 512-bit intermediate needed by full-precision division is kept as an
//! explicit `(low, high)` pair of words built from 128-bit limbs.

use crate::error::MathError;
use anchor_lang::prelude::*;
use ethnum::U256;

#[inline(always)]
pub fn checked_add(a: U256, b: U256) -> Result<U256> {
    Ok(a.checked_add(b).ok_or(MathError::Overflow)?)
}

#[inline(always)]
pub fn checked_sub(a: U256, b: U256) -> Result<U256> {
    Ok(a.checked_sub(b).ok_or(MathError::Overflow)?)
}

#[inline(always)]
pub fn checked_mul(a: U256, b: U256) -> Result<U256> {
    Ok(a.checked_mul(b).ok_or(MathError::Overflow)?)
}

/// Exact 512-bit product of `a` and `b`, returned as `(low, high)`.
///
/// Each operand is split into two 128-bit limbs; the four partial products
/// each fit a single word, and the two middle products are folded in with
/// explicit carry tracking.
#[inline]
pub fn full_mul(a: U256, b: U256) -> (U256, U256) {
    let (a_hi, a_lo) = a.into_words();
    let (b_hi, b_lo) = b.into_words();

    let ll = U256::from(a_lo) * U256::from(b_lo);
    let lh = U256::from(a_lo) * U256::from(b_hi);
    let hl = U256::from(a_hi) * U256::from(b_lo);
    let hh = U256::from(a_hi) * U256::from(b_hi);

    // Middle column sits at 2^128; its own carry is worth 2^384.
    let (mid, mid_carry) = lh.overflowing_add(hl);
    let (low, low_carry) = ll.overflowing_add(mid << 128u32);

    let mut high = hh.wrapping_add(mid >> 128u32);
    if low_carry {
        high = high.wrapping_add(U256::ONE);
    }
    if mid_carry {
        high = high.wrapping_add(U256::from_words(1, 0));
    }

    (low, high)
}

/// Remainder of the 512-bit value `high * 2^256 + low` divided by `d`.
///
/// Bit-serial reduction: the running remainder stays below `d`, so after each
/// doubling a single conditional subtraction restores the invariant. A bit
/// shifted out of the top is accounted for by letting the subtraction wrap.
pub fn mod_512(low: U256, high: U256, d: U256) -> Result<U256> {
    require!(d != U256::ZERO, MathError::DivisionByZero);

    let mut rem = high % d;
    for i in (0..256u32).rev() {
        let carry = rem.leading_zeros() == 0;
        rem = (rem << 1u32) | ((low >> i) & U256::ONE);
        if carry || rem >= d {
            rem = rem.wrapping_sub(d);
        }
    }

    Ok(rem)
}
