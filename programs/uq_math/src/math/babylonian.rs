//! # uq_math::math::babylonian
//!
//! Integer square root (floor) of a 256-bit word by Newton-Raphson.

use ethnum::U256;

// (threshold exponent, guess shift): if x >= 2^threshold then x >>= threshold
// and the guess gains threshold/2 bits.
const GUESS_STEPS: [(u32, u32); 6] = [(128, 64), (64, 32), (32, 16), (16, 8), (8, 4), (4, 2)];

/// Returns floor(sqrt(x)) for every `x`.
///
/// The initial guess is `1 << (msb(x) / 2)`, found with threshold comparisons
/// rather than a bit scan, so it is always within a factor of two of the root
/// and seven iterations are enough for full 128-bit precision. The last step
/// picks the smaller of `r` and `x / r`, which removes the possible +1 of the
/// Newton fixed point.
pub fn sqrt(x: U256) -> U256 {
    if x == U256::ZERO {
        return U256::ZERO;
    }

    let mut xx = x;
    let mut r = U256::ONE;
    for (threshold, shift) in GUESS_STEPS {
        if xx >= U256::ONE << threshold {
            xx = xx >> threshold;
            r = r << shift;
        }
    }
    if xx >= U256::new(0x8) {
        r = r << 1u32;
    }

    // Newton: r = (r + x / r) / 2
    for _ in 0..7 {
        r = (r + x / r) >> 1u32;
    }

    let r1 = x / r;
    if r < r1 {
        r
    } else {
        r1
    }
}
