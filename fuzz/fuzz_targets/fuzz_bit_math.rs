use arbitrary::{Arbitrary, Unstructured};
use ethnum::U256;
use honggfuzz::fuzz;
use uq_math::{least_significant_bit, most_significant_bit};

#[derive(Debug, Clone)]
struct BitScanInput {
    x: U256,
}

impl<'a> Arbitrary<'a> for BitScanInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let hi = u.arbitrary::<u128>()?;
        let lo = u.arbitrary::<u128>()?;
        Ok(BitScanInput {
            x: U256::from_words(hi, lo),
        })
    }
}

fn fuzz_bit_scans(input: BitScanInput) {
    let x = input.x;

    if x == U256::ZERO {
        assert!(most_significant_bit(x).is_err());
        assert!(least_significant_bit(x).is_err());
        return;
    }

    let msb = u32::from(most_significant_bit(x).unwrap());
    let lsb = u32::from(least_significant_bit(x).unwrap());

    assert_eq!(msb, 255 - x.leading_zeros());
    assert_eq!(lsb, x.trailing_zeros());
    assert!(lsb <= msb);

    // x >= 2^msb and x < 2^(msb + 1)
    assert!(x >= U256::ONE << msb);
    if msb < 255 {
        assert!(x < U256::ONE << (msb + 1));
    }
    // bit lsb is set and nothing below it
    assert!((x >> lsb) & U256::ONE == U256::ONE);
    assert_eq!((x >> lsb) << lsb, x);
}

fn main() {
    loop {
        fuzz!(|data: BitScanInput| {
            fuzz_bit_scans(data);
        });
    }
}
