use anchor_lang::prelude::*;

use crate::state::PrizeKind;

/// A draw entered the animating phase; the winner is already fixed but
/// not yet revealed.
#[event]
pub struct DrawStarted {
    pub session: Pubkey,
    pub prize: PrizeKind,
    pub started_at_ms: i64,
}

/// The animation window elapsed and the stored winner became visible.
#[event]
pub struct DrawRevealed {
    pub session: Pubkey,
    pub prize: PrizeKind,
    pub winner: String,
}

/// The session returned to the selection phase.
#[event]
pub struct SessionReset {
    pub session: Pubkey,
}

/// A result snapshot was written. Snapshots are the durable record of
/// a draw once the session resets.
#[event]
pub struct ResultExported {
    pub session: Pubkey,
    pub snapshot: Pubkey,
    pub snapshot_id: u64,
    pub winner: String,
}
