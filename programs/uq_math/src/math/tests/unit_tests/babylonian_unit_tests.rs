#[cfg(test)]
mod tests {
    use crate::math::babylonian::sqrt;
    use ethnum::U256;

    #[test]
    fn test_sqrt_zero_to_ninety_nine() {
        for i in 0u128..100 {
            let expected = (0u128..=10).filter(|k| k * k <= i).max().unwrap();
            assert_eq!(sqrt(U256::new(i)), U256::new(expected), "sqrt({i})");
        }
        assert_eq!(sqrt(U256::new(99)), U256::new(9));
    }

    #[test]
    fn test_sqrt_products_close_to_max_uint112() {
        let max = U256::new((1u128 << 112) - 1);
        let max_minus_1 = max - U256::ONE;
        let max_minus_2 = max - U256::new(2);

        assert_eq!(sqrt(max * max), max);
        assert_eq!(sqrt(max_minus_1 * max_minus_1), max_minus_1);
        assert_eq!(sqrt(max_minus_2 * max_minus_2), max_minus_2);

        assert_eq!(sqrt(max * max_minus_1), max_minus_1);
        assert_eq!(sqrt(max * max_minus_2), max_minus_2);
        assert_eq!(sqrt(max_minus_1 * max_minus_2), max_minus_2);
    }

    #[test]
    fn test_sqrt_max_uint256() {
        assert_eq!(sqrt(U256::MAX), U256::from(u128::MAX));
    }

    #[test]
    fn test_sqrt_perfect_squares_around_word_boundaries() {
        for shift in [0u32, 1, 63, 64, 65, 127] {
            let k = U256::ONE << shift;
            assert_eq!(sqrt(k * k), k);
            assert_eq!(sqrt(k * k - U256::ONE), k - U256::ONE);
            assert_eq!(sqrt(k * k + U256::ONE), k);
        }
    }
}
