use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;

/// Resolve a token's content pointer to its gateway URL.
/// Read-only; the signer must hold an approved request.
pub fn emit_cid(ctx: Context<EmitCid>, _token_id: u64) -> Result<String> {
    let token = SoulboundToken::load(&ctx.accounts.token)?;

    AccessRequest::load(&ctx.accounts.access_request)?
        .ok_or(SoulboundError::AccessDenied)?
        .ensure_approved()?;

    Ok(token.gateway_url())
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct EmitCid<'info> {
    /// The viewer resolving the pointer
    pub viewer: Signer<'info>,

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

    /// Access request PDA for (token, signer)
    /// CHECK: loaded in the instruction; absent means the viewer never asked
    #[account(
        seeds = [
            AccessRequest::SEED_PREFIX,
            token.key().as_ref(),
            viewer.key().as_ref(),
        ],
        bump
    )]
    pub access_request: UncheckedAccount<'info>,
}
