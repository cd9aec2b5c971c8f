use ethnum::U256;

/// Number of fractional bits in a UQ112x112 value.
pub const RESOLUTION: u32 = 112;

pub const Q112: U256 = U256::from_words(0, 1u128 << RESOLUTION);
pub const Q224: U256 = U256::from_words(1u128 << 96, 0);

pub const MAX_U112: U256 = U256::from_words(0, (1u128 << 112) - 1);
pub const MAX_U144: U256 = U256::from_words((1u128 << 16) - 1, u128::MAX);
pub const MAX_U224: U256 = U256::from_words((1u128 << 96) - 1, u128::MAX);

/// Fractional part of a UQ*x112 value (lower 112 bits).
pub const LOWER_MASK: U256 = MAX_U112;

/// Smallest magnitude that no longer fits a positive `I256`.
pub const SIGNED_MAGNITUDE_LIMIT: U256 = U256::from_words(1u128 << 127, 0);
