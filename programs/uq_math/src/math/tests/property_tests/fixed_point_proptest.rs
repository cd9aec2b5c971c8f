#[cfg(test)]
mod tests {
    use crate::math::fixed_point::*;
    use crate::utils::constants::*;
    use ethnum::{I256, U256};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn big(x: U256) -> BigUint {
        BigUint::from_bytes_be(&x.to_be_bytes())
    }

    fn word(b: &BigUint) -> Option<U256> {
        if b.bits() > 256 {
            return None;
        }
        let bytes = b.to_bytes_be();
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        Some(U256::from_be_bytes(buf))
    }

    fn uint112() -> impl Strategy<Value = u128> {
        0u128..=((1u128 << 112) - 1)
    }

    // Raw UQ112x112 values: anything below 2^224.
    fn valid_uq112x112() -> impl Strategy<Value = UQ112x112> {
        (0u128..(1u128 << 96), any::<u128>())
            .prop_map(|(hi, lo)| UQ112x112::from_raw(U256::from_words(hi, lo)))
    }

    fn positive_uq112x112() -> impl Strategy<Value = UQ112x112> {
        valid_uq112x112().prop_filter("non-zero", |q| q.raw() != U256::ZERO)
    }

    // Values near 1.0 so products and quotients mostly stay in range.
    fn moderate_uq112x112() -> impl Strategy<Value = UQ112x112> {
        (0u128..(1u128 << 16), any::<u128>())
            .prop_map(|(hi, lo)| UQ112x112::from_raw(U256::from_words(hi, lo)))
    }

    fn any_word() -> impl Strategy<Value = U256> {
        (any::<u128>(), any::<u128>()).prop_map(|(hi, lo)| U256::from_words(hi, lo))
    }

    proptest! {
        #[test]
        fn test_decode_encode_roundtrip(x in uint112()) {
            let encoded = UQ112x112::encode(x).unwrap();
            prop_assert_eq!(encoded.raw(), U256::from(x) << RESOLUTION);
            prop_assert_eq!(encoded.decode().unwrap(), x);
        }

        #[test]
        fn test_decode144_encode144_roundtrip(hi in 0u128..(1u128 << 16), lo in any::<u128>()) {
            let x = U256::from_words(hi, lo);
            prop_assert_eq!(UQ112x112::encode144(x).unwrap().decode144(), x);
        }

        #[test]
        fn test_mul_matches_checked_product(a in valid_uq112x112(), y in any_word()) {
            let expected = word(&(big(a.raw()) * big(y)));
            match (a.mul(y), expected) {
                (Ok(value), Some(expected)) => prop_assert_eq!(value.raw(), expected),
                (Err(_), None) => (),
                (got, expected) => panic!("mul = {got:?}, expected {expected:?}"),
            }
        }

        #[test]
        fn test_muli_sign_and_magnitude(a in moderate_uq112x112(), y in any::<i128>()) {
            let y = I256::from(y);
            let magnitude = big(a.raw()) * big(y.unsigned_abs()) >> 112u32;
            let result = a.muli(y).unwrap();
            prop_assert_eq!(big(result.unsigned_abs()), magnitude);
            if result != I256::ZERO {
                prop_assert_eq!(result < I256::ZERO, y < I256::ZERO);
            }
        }

        #[test]
        fn test_muluq_is_floor_of_product(a in valid_uq112x112(), b in valid_uq112x112()) {
            let exact = big(a.raw()) * big(b.raw()) >> 112u32;
            let upper = big(a.raw() >> RESOLUTION) * big(b.raw() >> RESOLUTION);
            let fits = upper <= big(MAX_U112) && exact <= big(MAX_U224);
            match a.muluq(b) {
                Ok(value) => prop_assert_eq!(big(value.raw()), exact),
                Err(_) => prop_assert!(!fits),
            }
        }

        #[test]
        fn test_muluq_commutative(a in moderate_uq112x112(), b in moderate_uq112x112()) {
            prop_assert_eq!(a.muluq(b).unwrap(), b.muluq(a).unwrap());
        }

        #[test]
        fn test_muluq_identity(a in valid_uq112x112()) {
            prop_assert_eq!(a.muluq(UQ112x112::one()).unwrap(), a);
        }

        #[test]
        fn test_divuq_is_floor_of_quotient(a in valid_uq112x112(), b in positive_uq112x112()) {
            let exact = (big(a.raw()) << 112u32) / big(b.raw());
            match a.divuq(b) {
                Ok(value) => prop_assert_eq!(big(value.raw()), exact),
                Err(_) => prop_assert!(exact > big(MAX_U224)),
            }
        }

        #[test]
        fn test_divuq_identity(a in positive_uq112x112()) {
            prop_assert_eq!(a.divuq(a).unwrap(), UQ112x112::one());
            prop_assert_eq!(a.divuq(UQ112x112::one()).unwrap(), a);
        }

        #[test]
        fn test_fraction_is_floor_of_ratio(n in any_word(), d in any_word()) {
            prop_assume!(d != U256::ZERO);
            let exact = (big(n) << 112u32) / big(d);
            match UQ112x112::fraction(n, d) {
                Ok(value) => prop_assert_eq!(big(value.raw()), exact),
                Err(_) => prop_assert!(exact > big(MAX_U224)),
            }
        }

        #[test]
        fn test_reciprocal_is_floor(a in positive_uq112x112()) {
            prop_assume!(a.raw() != U256::ONE);
            prop_assert_eq!(a.reciprocal().unwrap().raw(), Q224 / a.raw());
        }

        #[test]
        fn test_sqrt_exact_below_uint144(hi in 0u128..(1u128 << 16), lo in any::<u128>()) {
            let a = UQ112x112::from_raw(U256::from_words(hi, lo));
            let exact = (big(a.raw()) << 112u32).sqrt();
            prop_assert_eq!(big(a.sqrt().unwrap().raw()), exact);
        }

        #[test]
        fn test_sqrt_precision_ceiling(a in valid_uq112x112()) {
            prop_assume!(a.raw() > MAX_U144);
            let mut shift = a.raw().leading_zeros();
            shift -= shift % 2;
            let dropped = (112 - shift) / 2;

            let result = a.sqrt().unwrap().raw();
            let exact = (big(a.raw()) << 112u32).sqrt();

            prop_assert_eq!(result & ((U256::ONE << dropped) - U256::ONE), U256::ZERO);
            prop_assert!(big(result) <= exact);
            prop_assert!(exact - big(result) < BigUint::from(1u32) << dropped);
        }
    }
}
