use anchor_lang::prelude::*;

use crate::constants::{SESSION_SEED, SNAPSHOT_SEED};
use crate::error::GachaError;
use crate::events::ResultExported;
use crate::state::{DrawSession, Phase, ResultSnapshot};

/// Accounts required to export the currently revealed result.
///
/// This ensures that:
/// 1. Only the session authority can export.
/// 2. Each snapshot gets its own PDA, derived from a client-chosen,
///    timestamp-derived identifier, so repeated exports never collide.
#[derive(Accounts)]
#[instruction(snapshot_id: u64)]
pub struct ExportResult<'info> {
    /// The account paying for the snapshot.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The session state account. Read-only here: a failed export must
    /// never disturb the sequencer.
    #[account(
        seeds = [SESSION_SEED, authority.key().as_ref()],
        bump = session.bump,
        has_one = authority @ GachaError::NotAuthorized,
    )]
    pub session: Account<'info, DrawSession>,

    /// The snapshot record being written.
    #[account(
        init,
        payer = authority,
        space = 8 + ResultSnapshot::INIT_SPACE,
        seeds = [SNAPSHOT_SEED, session.key().as_ref(), snapshot_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub snapshot: Account<'info, ResultSnapshot>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Captures the revealed result into an immutable snapshot account.
/// Only legal while the session is in `Result`; best-effort, the user
/// retries with a fresh identifier if anything fails.
pub fn process_export_result(ctx: Context<ExportResult>, snapshot_id: u64) -> Result<()> {
    let session = &ctx.accounts.session;
    require!(session.phase == Phase::Result, GachaError::InvalidPhase);

    let prize = session.prize.ok_or(GachaError::InvalidPhase)?;
    let winner = session.winner_name().ok_or(GachaError::InvalidPhase)?;
    let clock = Clock::get()?;

    let snapshot = &mut ctx.accounts.snapshot;
    snapshot.bump = ctx.bumps.snapshot;
    snapshot.session = session.key();
    snapshot.snapshot_id = snapshot_id;
    snapshot.prize = prize;
    snapshot.winner = winner.to_string();
    snapshot.exported_at = clock.unix_timestamp;

    msg!("Result exported as snapshot {}", snapshot_id);
    emit!(ResultExported {
        session: session.key(),
        snapshot: snapshot.key(),
        snapshot_id,
        winner: winner.to_string(),
    });
    Ok(())
}
