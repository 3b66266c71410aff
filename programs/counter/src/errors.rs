use anchor_lang::prelude::*;

#[error_code]
pub enum CounterError {
    #[msg("Unauthorized: signer is not the counter authority")]
    Unauthorized,

    #[msg("Counter is at its maximum value")]
    Overflow,

    #[msg("Counter is already at zero")]
    Underflow,
}
