use anchor_lang::prelude::*;

use crate::constants::SESSION_SEED;
use crate::error::GachaError;
use crate::events::SessionReset;
use crate::state::DrawSession;

/// Accounts required to reset the session after a reveal.
#[derive(Accounts)]
pub struct Reset<'info> {
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

/// Clears the finished draw and returns the session to `Selection`.
/// The discarded result survives only in snapshots exported earlier.
pub fn process_reset(ctx: Context<Reset>) -> Result<()> {
    let session = &mut ctx.accounts.session;
    session.clear()?;

    msg!("Session reset to selection");
    emit!(SessionReset {
        session: session.key(),
    });
    Ok(())
}
