use arbitrary::{Arbitrary, Unstructured};
use ethnum::U256;
use honggfuzz::fuzz;
use uq_math::{mul_div, mul_div_rounding_up, mul_mod};

#[derive(Debug, Clone)]
struct MulDivInput {
    a: U256,
    b: U256,
    d: U256,
}

impl<'a> Arbitrary<'a> for MulDivInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut word = || -> arbitrary::Result<U256> {
            Ok(U256::from_words(u.arbitrary::<u128>()?, u.arbitrary::<u128>()?))
        };
        Ok(MulDivInput {
            a: word()?,
            b: word()?,
            d: word()?,
        })
    }
}

#[derive(Debug, Clone, Arbitrary)]
enum MulDivOp {
    Floor,
    RoundUp,
    Mod,
}

#[derive(Debug, Clone, Arbitrary)]
struct MulDivTest {
    input: MulDivInput,
    operation: MulDivOp,
}

fn fuzz_mul_div_operations(test: MulDivTest) {
    let MulDivTest { input, operation } = test;
    let MulDivInput { a, b, d } = input;

    match operation {
        MulDivOp::Floor => match mul_div(a, b, d) {
            Ok(value) => {
                assert!(d != U256::ZERO);
                if a == U256::ZERO || b == U256::ZERO {
                    assert_eq!(value, U256::ZERO);
                }
                if let Some(product) = a.checked_mul(b) {
                    assert_eq!(value, product / d);
                }
                // swapping the factors never changes the quotient
                assert_eq!(mul_div(b, a, d).ok(), Some(value));
            }
            Err(e) => {
                let error_msg = format!("{:?}", e);
                assert!(error_msg.contains("DivisionByZero") || error_msg.contains("Overflow"));
                if error_msg.contains("DivisionByZero") {
                    assert_eq!(d, U256::ZERO);
                } else {
                    // an overflowing quotient means a * b >= d * 2^256
                    assert!(a.checked_mul(b).is_none());
                }
            }
        },

        MulDivOp::RoundUp => match mul_div_rounding_up(a, b, d) {
            Ok(value) => {
                let floor = mul_div(a, b, d).ok();
                assert!(floor.is_some());
                if let Some(floor) = floor {
                    assert!(value >= floor);
                    assert!(value - floor <= U256::ONE);
                    let exact = mul_mod(a, b, d).ok() == Some(U256::ZERO);
                    assert_eq!(value == floor, exact);
                }
            }
            Err(e) => {
                let error_msg = format!("{:?}", e);
                assert!(error_msg.contains("DivisionByZero") || error_msg.contains("Overflow"));
                if error_msg.contains("DivisionByZero") {
                    assert_eq!(d, U256::ZERO);
                }
            }
        },

        MulDivOp::Mod => match mul_mod(a, b, d) {
            Ok(rem) => {
                assert!(rem < d);
                if let Some(product) = a.checked_mul(b) {
                    assert_eq!(rem, product % d);
                }
            }
            Err(_) => assert_eq!(d, U256::ZERO),
        },
    }
}

fn main() {
    loop {
        fuzz!(|data: MulDivTest| {
            fuzz_mul_div_operations(data);
        });
    }
}
