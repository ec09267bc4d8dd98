use anchor_lang::prelude::*;

#[error_code]
pub enum GachaError {
    #[msg("Prize pool has no participants")]
    EmptyPool,

    #[msg("Instruction is not valid in the session's current phase")]
    InvalidPhase,

    #[msg("Animation has not finished; the result cannot be revealed yet")]
    RevealTooEarly,

    #[msg("Signer is not the session authority")]
    NotAuthorized,

    #[msg("Timestamp arithmetic overflowed")]
    NumericOverflow,
}
