use anchor_lang::prelude::*;

use crate::constants::SESSION_SEED;
use crate::state::{DrawSession, Phase};

/// Accounts required to create a draw session.
///
/// One session exists per authority; it is the single state holder for
/// the whole selection/animating/result cycle.
#[derive(Accounts)]
pub struct InitializeSession<'info> {
    /// The account paying for session creation and driving it afterwards.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The session state account.
    #[account(
        init,
        payer = authority,
        space = 8 + DrawSession::INIT_SPACE,
        seeds = [SESSION_SEED, authority.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, DrawSession>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the session in the `Selection` phase with no draw in flight.
pub fn process_initialize_session(ctx: Context<InitializeSession>) -> Result<()> {
    let session = &mut ctx.accounts.session;
    session.bump = ctx.bumps.session;
    session.authority = ctx.accounts.authority.key();
    session.phase = Phase::Selection;
    session.prize = None;
    session.winner = None;
    session.started_at_ms = 0;
    Ok(())
}
