use anchor_lang::prelude::*;
use crate::state::*;
use crate::events::*;

/// Ask the administrator for permission to resolve a token's content pointer.
/// The signer is the viewer; asking again is a no-op.
pub fn request_view_cid(ctx: Context<RequestViewCid>, token_id: u64) -> Result<()> {
    let token = SoulboundToken::load(&ctx.accounts.token)?;

    let viewer = ctx.accounts.viewer.key();
    let token_key = ctx.accounts.token.key();
    let clock = Clock::get()?;

    let access_request = &mut ctx.accounts.access_request;
    if access_request.request(token_key, token.token_id, viewer, clock.unix_timestamp) {
        access_request.bump = ctx.bumps.access_request;

        emit!(ViewRequested { token_id, viewer });

        msg!("Viewer {} requested access to token {}", viewer, token_id);
    } else {
        msg!("Viewer {} already has a request on token {}", viewer, token_id);
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct RequestViewCid<'info> {
    /// The viewer asking for access, pays for the request account
    #[account(mut)]
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

    /// Access request PDA for (token, viewer)
    #[account(
        init_if_needed,
        payer = viewer,
        space = AccessRequest::LEN,
        seeds = [
            AccessRequest::SEED_PREFIX,
            token.key().as_ref(),
            viewer.key().as_ref(),
        ],
        bump
    )]
    pub access_request: Account<'info, AccessRequest>,

    /// System program
    pub system_program: Program<'info, System>,
}
