use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::events::*;

/// Approve a viewer's pending request on a token
pub fn approve_viewer(ctx: Context<ApproveViewer>, viewer: Pubkey, token_id: u64) -> Result<()> {
    ctx.accounts
        .registry
        .ensure_administrator(&ctx.accounts.administrator.key())?;

    SoulboundToken::load(&ctx.accounts.token)?;

    let mut access_request = AccessRequest::load(&ctx.accounts.access_request)?
        .ok_or(SoulboundError::RequestNotFound)?;

    let clock = Clock::get()?;
    if !access_request.approve(clock.unix_timestamp)? {
        msg!("Viewer {} already approved for token {}", viewer, token_id);
        return Ok(());
    }

    access_request.store(&ctx.accounts.access_request)?;

    emit!(ViewerApproved { token_id, viewer });

    msg!("Viewer {} approved for token {}", viewer, token_id);

    Ok(())
}

#[derive(Accounts)]
#[instruction(viewer: Pubkey, token_id: u64)]
pub struct ApproveViewer<'info> {
    /// Registry administrator
    pub administrator: Signer<'info>,

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

    /// Access request PDA for (token, viewer)
    /// CHECK: loaded in the instruction so a missing request reports RequestNotFound
    #[account(
        mut,
        seeds = [
            AccessRequest::SEED_PREFIX,
            token.key().as_ref(),
            viewer.as_ref(),
        ],
        bump
    )]
    pub access_request: UncheckedAccount<'info>,
}
