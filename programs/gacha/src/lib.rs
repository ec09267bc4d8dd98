use anchor_lang::prelude::*;
use instructions::*;

mod constants;
mod draw;
mod error;
mod events;
mod instructions;
mod state;

use state::PrizeKind;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod gacha {
    use super::*;

    pub fn initialize_session(ctx: Context<InitializeSession>) -> Result<()> {
        process_initialize_session(ctx)
    }

    pub fn start_draw(ctx: Context<StartDraw>, prize: PrizeKind) -> Result<()> {
        process_start_draw(ctx, prize)
    }

    pub fn reveal_result(ctx: Context<RevealResult>) -> Result<()> {
        process_reveal_result(ctx)
    }

    pub fn reset(ctx: Context<Reset>) -> Result<()> {
        process_reset(ctx)
    }

    pub fn export_result(ctx: Context<ExportResult>, snapshot_id: u64) -> Result<()> {
        process_export_result(ctx, snapshot_id)
    }

    pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
        process_close_session(ctx)
    }
}
