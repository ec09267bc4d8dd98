use anchor_lang::prelude::*;

use crate::constants::{
    PrizeInfo, ANIMATION_DURATION_MS, AUDIO_INTERFACE, MAX_WINNER_NAME_LEN, MOUSEPAD,
    STAGE_OFFSETS_MS,
};
use crate::draw;
use crate::error::GachaError;

/// The closed set of prizes this program can draw for. Extending the
/// catalog means adding a variant here and its entry in `constants`.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrizeKind {
    Mousepad,
    AudioInterface,
}

impl PrizeKind {
    pub fn info(&self) -> &'static PrizeInfo {
        match self {
            PrizeKind::Mousepad => &MOUSEPAD,
            PrizeKind::AudioInterface => &AUDIO_INTERFACE,
        }
    }
}

/// Phase of one draw cycle. Legal transitions are
/// `Selection -> Animating -> Result -> Selection`, nothing else.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Selection,
    Animating,
    Result,
}

#[account]
#[derive(InitSpace)]
pub struct DrawSession {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The authority allowed to drive this session's transitions.
    pub authority: Pubkey,

    /// Current phase of the draw cycle.
    pub phase: Phase,

    /// The prize being drawn for. `None` while in `Selection`.
    pub prize: Option<PrizeKind>,

    /// Index of the winner within the prize's member list. Fixed the
    /// instant the draw starts, before `Animating` becomes observable,
    /// and never changed until reset.
    pub winner: Option<u8>,

    /// Millisecond timestamp at which the animation started. `0` while
    /// in `Selection`.
    pub started_at_ms: i64,
}

impl DrawSession {
    /// Start a draw: fix the winner, then enter `Animating`.
    ///
    /// The winner is stored before the phase changes so the eventual
    /// reveal never recomputes or races on it.
    pub fn begin(&mut self, prize: PrizeKind, seed: u64, now_ms: i64) -> Result<()> {
        require!(self.phase == Phase::Selection, GachaError::InvalidPhase);
        let index = draw::pick_winner(seed, prize.info().members.len())?;
        self.winner = Some(index as u8);
        self.prize = Some(prize);
        self.started_at_ms = now_ms;
        self.phase = Phase::Animating;
        Ok(())
    }

    /// Enter `Result` once the animation window has fully elapsed.
    /// Nothing can shorten the window; early calls are rejected.
    pub fn reveal(&mut self, now_ms: i64) -> Result<()> {
        require!(self.phase == Phase::Animating, GachaError::InvalidPhase);
        require!(
            now_ms.saturating_sub(self.started_at_ms) >= ANIMATION_DURATION_MS,
            GachaError::RevealTooEarly
        );
        self.phase = Phase::Result;
        Ok(())
    }

    /// Discard the finished draw and return to `Selection`.
    pub fn clear(&mut self) -> Result<()> {
        require!(self.phase == Phase::Result, GachaError::InvalidPhase);
        self.prize = None;
        self.winner = None;
        self.started_at_ms = 0;
        self.phase = Phase::Selection;
        Ok(())
    }

    /// Resolve the stored winner index against the catalog.
    pub fn winner_name(&self) -> Option<&'static str> {
        let prize = self.prize?;
        prize.info().members.get(self.winner? as usize).copied()
    }

    /// Which visual stage the animation is in at `now_ms`. Purely
    /// presentational; carries no outcome information.
    pub fn animation_stage(&self, now_ms: i64) -> u8 {
        match self.phase {
            Phase::Animating => stage_at(now_ms.saturating_sub(self.started_at_ms)),
            _ => 0,
        }
    }
}

/// Map elapsed animation time to a stage number 0..=4.
pub fn stage_at(elapsed_ms: i64) -> u8 {
    let mut stage = 0;
    for offset in STAGE_OFFSETS_MS {
        if elapsed_ms >= offset {
            stage += 1;
        }
    }
    stage
}

/// An immutable record of one revealed result, written on demand while
/// the session is in `Result`. Snapshots survive the session's reset.
#[account]
#[derive(InitSpace)]
pub struct ResultSnapshot {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The session this snapshot was exported from.
    pub session: Pubkey,

    /// Client-chosen, timestamp-derived identifier of this export.
    pub snapshot_id: u64,

    /// The prize that was drawn.
    pub prize: PrizeKind,

    /// The winning participant's name, resolved at export time.
    #[max_len(MAX_WINNER_NAME_LEN)]
    pub winner: String,

    /// Unix timestamp at which the export happened.
    pub exported_at: i64,
}
