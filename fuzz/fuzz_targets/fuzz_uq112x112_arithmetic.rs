use arbitrary::{Arbitrary, Unstructured};
use ethnum::{I256, U256};
use honggfuzz::fuzz;
use uq_math::utils::constants::{MAX_U144, MAX_U224};
use uq_math::UQ112x112;

#[derive(Debug, Clone)]
struct UQ112x112Pair {
    a: UQ112x112,
    b: UQ112x112,
}

impl<'a> Arbitrary<'a> for UQ112x112Pair {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // keep both operands inside the UQ112x112 range
        let a_hi = u.int_in_range(0..=(1u128 << 96) - 1)?;
        let a_lo = u.arbitrary::<u128>()?;
        let b_hi = u.int_in_range(0..=(1u128 << 96) - 1)?;
        let b_lo = u.arbitrary::<u128>()?;

        Ok(UQ112x112Pair {
            a: UQ112x112::from_raw(U256::from_words(a_hi, a_lo)),
            b: UQ112x112::from_raw(U256::from_words(b_hi, b_lo)),
        })
    }
}

#[derive(Debug, Clone, Arbitrary)]
enum ArithmeticOp {
    Muluq,
    Divuq,
    Fraction,
    Reciprocal,
    Sqrt,
    Mul(u128),
    Muli(i128),
}

#[derive(Debug, Clone, Arbitrary)]
struct ArithmeticInput {
    pair: UQ112x112Pair,
    operation: ArithmeticOp,
}

fn assert_overflow_or_div_zero(e: &anchor_lang::error::Error) {
    let error_msg = format!("{:?}", e);
    assert!(error_msg.contains("Overflow") || error_msg.contains("DivisionByZero"));
}

fn fuzz_arithmetic(input: ArithmeticInput) {
    let ArithmeticInput { pair, operation } = input;
    let UQ112x112Pair { a, b } = pair;

    match operation {
        ArithmeticOp::Muluq => match a.muluq(b) {
            Ok(product) => {
                assert!(product.raw() <= MAX_U224);
                assert_eq!(b.muluq(a).ok(), Some(product));
                if a == UQ112x112::one() {
                    assert_eq!(product, b);
                }
            }
            Err(e) => assert_overflow_or_div_zero(&e),
        },

        ArithmeticOp::Divuq => match a.divuq(b) {
            Ok(quotient) => {
                assert!(b.raw() != U256::ZERO);
                assert!(quotient.raw() <= MAX_U224);
                if a == b {
                    assert_eq!(quotient, UQ112x112::one());
                }
                if b == UQ112x112::one() {
                    assert_eq!(quotient, a);
                }
            }
            Err(e) => {
                assert_overflow_or_div_zero(&e);
                if format!("{:?}", e).contains("DivisionByZero") {
                    assert_eq!(b.raw(), U256::ZERO);
                }
            }
        },

        ArithmeticOp::Fraction => match UQ112x112::fraction(a.raw(), b.raw()) {
            Ok(ratio) => {
                assert!(ratio.raw() <= MAX_U224);
                // same ratio as the fixed-point quotient of the raw operands
                assert_eq!(a.divuq(b).ok(), Some(ratio));
            }
            Err(e) => assert_overflow_or_div_zero(&e),
        },

        ArithmeticOp::Reciprocal => match a.reciprocal() {
            Ok(inverse) => {
                assert!(a.raw() > U256::ONE);
                assert!(inverse.raw() <= MAX_U224);
            }
            Err(e) => {
                assert_overflow_or_div_zero(&e);
                assert!(a.raw() <= U256::ONE);
            }
        },

        ArithmeticOp::Sqrt => {
            let root = a.sqrt().unwrap();
            // exact range: root^2 never exceeds the input, compared at scale 2^224
            let root_raw = root.raw();
            assert!(a.raw() > MAX_U144 || root_raw * root_raw <= a.raw() << 112u32);
            assert_eq!(a.sqrt().ok(), Some(root));
        }

        ArithmeticOp::Mul(y) => match a.mul(U256::new(y)) {
            Ok(product) => assert_eq!(product.decode144(), (a.raw() * U256::new(y)) >> 112u32),
            Err(e) => assert_overflow_or_div_zero(&e),
        },

        ArithmeticOp::Muli(y) => match a.muli(I256::new(y)) {
            Ok(value) => {
                if y < 0 {
                    assert!(value <= I256::ZERO);
                } else {
                    assert!(value >= I256::ZERO);
                }
                assert_eq!(a.muli(-I256::new(y)).ok(), Some(-value));
            }
            Err(e) => assert_overflow_or_div_zero(&e),
        },
    }
}

fn main() {
    loop {
        fuzz!(|data: ArithmeticInput| {
            fuzz_arithmetic(data);
        });
    }
}
