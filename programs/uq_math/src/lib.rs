//! # uq_math
//!
//! Deterministic 256-bit fixed-point math for Fluxa price and ratio accumulators.
//!
//! Every operation is a pure function over `ethnum::U256` words and returns a
//! typed `Result`; overflow is always an error, never a silent wrap or clamp.
//! Identical inputs produce bit-identical outputs on every platform.

pub mod error;
pub mod math;
pub mod utils;

pub use error::MathError;
pub use math::bit_math::{least_significant_bit, most_significant_bit};
pub use math::fixed_point::UQ112x112;
pub use math::full_math::{mul_div, mul_div_rounding_up, mul_mod};
