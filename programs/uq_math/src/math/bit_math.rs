//! # uq_math::math::bit_math
//!
//! Most/least significant set bit of a 256-bit word.
//!
//! Both scans are a binary search over halving windows (128, 64, ..., 1 bits),
//! so they cost a fixed eight comparisons regardless of the input.

use crate::error::MathError;
use anchor_lang::prelude::*;
use ethnum::U256;

const WINDOWS: [u32; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Index (0 = lowest) of the highest set bit of `x`.
///
/// Fails with `MathError::ZeroInput` when `x` is zero.
#[inline]
pub fn most_significant_bit(x: U256) -> Result<u8> {
    require!(x > U256::ZERO, MathError::ZeroInput);

    let mut x = x;
    let mut r: u32 = 0;
    for width in WINDOWS {
        if x >= U256::ONE << width {
            x = x >> width;
            r += width;
        }
    }

    Ok(r as u8)
}

/// Index (0 = lowest) of the lowest set bit of `x`.
///
/// Fails with `MathError::ZeroInput` when `x` is zero.
#[inline]
pub fn least_significant_bit(x: U256) -> Result<u8> {
    require!(x > U256::ZERO, MathError::ZeroInput);

    let mut x = x;
    let mut r: u32 = 255;
    for width in WINDOWS {
        let mask = (U256::ONE << width) - U256::ONE;
        if x & mask > U256::ZERO {
            r -= width;
        } else {
            x = x >> width;
        }
    }

    Ok(r as u8)
}
