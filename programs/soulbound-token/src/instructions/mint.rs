use anchor_lang::prelude::*;
use crate::state::*;
use crate::events::*;

/// Issue a soulbound token carrying `content_pointer` to `holder`
pub fn mint(
    ctx: Context<MintToken>,
    holder: Pubkey,
    token_id: u64,
    content_pointer: String,
) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();

    // Verify caller is the registry administrator
    ctx.accounts.registry.ensure_administrator(&administrator)?;

    let clock = Clock::get()?;
    let registry_key = ctx.accounts.registry.key();

    let token = &mut ctx.accounts.token;
    token.issue(token_id, holder, content_pointer, administrator, clock.unix_timestamp)?;
    token.registry = registry_key;
    token.bump = ctx.bumps.token;

    let total_minted = ctx.accounts.registry.record_mint()?;

    emit!(TokenMinted { token_id, holder });

    msg!("Token {} minted for holder: {}, total minted: {}",
        token_id, holder, total_minted);

    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey, token_id: u64)]
pub struct MintToken<'info> {
    /// Registry administrator
    #[account(mut)]
    pub administrator: Signer<'info>,

    /// Registry PDA
    #[account(
        mut,
        seeds = [Registry::SEED_PREFIX],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Token PDA for `token_id`
    /// Loaded if it already exists; issuing into it then fails with DuplicateTokenId
    #[account(
        init_if_needed,
        payer = administrator,
        space = SoulboundToken::LEN,
        seeds = [
            SoulboundToken::SEED_PREFIX,
            registry.key().as_ref(),
            token_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub token: Account<'info, SoulboundToken>,

    /// System program
    pub system_program: Program<'info, System>,
}
