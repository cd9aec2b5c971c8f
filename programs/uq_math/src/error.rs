use anchor_lang::prelude::*;

#[error_code]
pub enum MathError {
    #[msg("Arithmetic overflow detected")]
    Overflow = 9000,

    #[msg("Division by zero attempted")]
    DivisionByZero = 9001,

    #[msg("Bit scan requested on zero")]
    ZeroInput = 9002,

    #[msg("Input value outside the operation's bit-width domain")]
    InvalidDomain = 9003,
}
