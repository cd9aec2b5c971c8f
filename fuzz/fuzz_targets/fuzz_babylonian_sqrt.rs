use arbitrary::{Arbitrary, Unstructured};
use ethnum::U256;
use honggfuzz::fuzz;
use uq_math::math::babylonian;

#[derive(Debug, Clone)]
struct SqrtInput {
    x: U256,
}

impl<'a> Arbitrary<'a> for SqrtInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let hi = u.arbitrary::<u128>()?;
        let lo = u.arbitrary::<u128>()?;
        Ok(SqrtInput {
            x: U256::from_words(hi, lo),
        })
    }
}

fn fuzz_sqrt(input: SqrtInput) {
    let x = input.x;
    let r = babylonian::sqrt(x);

    // the root of a 256-bit word fits 128 bits
    assert!(r <= U256::new(u128::MAX));

    // r^2 <= x < (r + 1)^2
    assert!(r * r <= x);
    let next = r + U256::ONE;
    if let Some(square) = next.checked_mul(next) {
        assert!(square > x);
    }

    assert_eq!(babylonian::sqrt(x), r);
}

fn main() {
    loop {
        fuzz!(|data: SqrtInput| {
            fuzz_sqrt(data);
        });
    }
}
