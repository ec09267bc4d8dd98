use anchor_lang::prelude::*;

use crate::constants::SESSION_SEED;
use crate::draw;
use crate::error::GachaError;
use crate::events::DrawStarted;
use crate::state::{DrawSession, PrizeKind};

/// Accounts required to start a draw.
///
/// This ensures that:
/// 1. Only the session authority can trigger a draw.
/// 2. The session is the authority's own PDA.
#[derive(Accounts)]
pub struct StartDraw<'info> {
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

/// Starts a draw for `prize`: the winner is picked and stored in this
/// same transaction, before the `Animating` phase is observable, then
/// the 6 second reveal window opens.
pub fn process_start_draw(ctx: Context<StartDraw>, prize: PrizeKind) -> Result<()> {
    let clock = Clock::get()?;
    let session = &mut ctx.accounts.session;

    let now_ms = clock
        .unix_timestamp
        .checked_mul(1_000)
        .ok_or(GachaError::NumericOverflow)?;
    let seed = draw::mix_seed(clock.slot, clock.unix_timestamp, &session.key());

    session.begin(prize, seed, now_ms)?;

    msg!("Draw started for prize: {}", prize.info().display_name);
    emit!(DrawStarted {
        session: session.key(),
        prize,
        started_at_ms: now_ms,
    });
    Ok(())
}
