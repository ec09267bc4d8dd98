use anchor_lang::prelude::*;

use crate::constants::SESSION_SEED;
use crate::error::GachaError;
use crate::state::DrawSession;

/// Accounts required to tear a session down.
///
/// Closing is legal in any phase: a session destroyed mid-animation
/// simply never reaches `Result`, and no transition can fire against
/// it afterwards.
#[derive(Accounts)]
pub struct CloseSession<'info> {
    /// The session authority, refunded the rent.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The session state account being closed.
    #[account(
        mut,
        close = authority,
        seeds = [SESSION_SEED, authority.key().as_ref()],
        bump = session.bump,
        has_one = authority @ GachaError::NotAuthorized,
    )]
    pub session: Account<'info, DrawSession>,
}

pub fn process_close_session(ctx: Context<CloseSession>) -> Result<()> {
    msg!("Session {} closed", ctx.accounts.session.key());
    Ok(())
}
