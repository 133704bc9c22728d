use anchor_lang::prelude::*;
use crate::state::*;

/// Soulbound tokens are always locked once minted
pub fn locked(ctx: Context<Locked>, _token_id: u64) -> Result<bool> {
    SoulboundToken::load(&ctx.accounts.token)?;
    Ok(true)
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct Locked<'info> {
    /// Registry PDA
    #[account(
        seeds = [Registry::SEED_PREFIX],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Token PDA
    /// CHECK: loaded in the instruction so a missing token reports TokenNotFound
    #[account(
        seeds = [
            SoulboundToken::SEED_PREFIX,
            registry.key().as_ref(),
            token_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub token: UncheckedAccount<'info>,
}
