use anchor_lang::prelude::*;

use crate::constants::SESSION_SEED;
use crate::error::GachaError;
use crate::events::DrawRevealed;
use crate::state::DrawSession;

/// Accounts required to reveal a finished draw.
///
/// This ensures that:
/// 1. Only the session authority can reveal.
/// 2. The animation window has fully elapsed (checked in the handler).
#[derive(Accounts)]
pub struct RevealResult<'info> {
    /// The session authority.
    pub authority: Signer<'info>,

    /// The session state account.
    #[account(
        mut,
        seeds = [SESSION_SEED, authority.key().as_ref()],
        bump = session.bump,
        has_one = authority @ GachaError::NotAuthorized,
    )]
    pub session: Account<'info, DrawSession>,
}

/// Moves the session from `Animating` to `Result` once 6000 ms have
/// elapsed since the draw started. The winner stored at draw time is
/// exposed unchanged; nothing is recomputed here.
pub fn process_reveal_result(ctx: Context<RevealResult>) -> Result<()> {
    let clock = Clock::get()?;
    let session = &mut ctx.accounts.session;

    let now_ms = clock
        .unix_timestamp
        .checked_mul(1_000)
        .ok_or(GachaError::NumericOverflow)?;
    msg!("Animation stage at reveal: {}", session.animation_stage(now_ms));

    session.reveal(now_ms)?;

    let prize = session.prize.ok_or(GachaError::InvalidPhase)?;
    let winner = session.winner_name().ok_or(GachaError::InvalidPhase)?;
    msg!("Winner of {}: {}", prize.info().display_name, winner);
    emit!(DrawRevealed {
        session: session.key(),
        prize,
        winner: winner.to_string(),
    });
    Ok(())
}
