#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;

use instructions::*;

#[program]
pub mod soulbound_token {
    use super::*;

    /// Create the registry; the signer becomes its administrator.
    /// Only the program's upgrade authority may call this.
    ///
    /// # Arguments
    /// * `name` - Collection name (1..=32 bytes)
    /// * `symbol` - Collection symbol (1..=10 bytes)
    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        name: String,
        symbol: String,
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(ctx, name, symbol)
    }

    /// Mint a non-transferable token bound to `holder`. Administrator only.
    ///
    /// # Arguments
    /// * `holder` - Identity the token is bound to
    /// * `token_id` - Unique token identifier
    /// * `content_pointer` - Content identifier in the external store
    pub fn mint(
        ctx: Context<MintToken>,
        holder: Pubkey,
        token_id: u64,
        content_pointer: String,
    ) -> Result<()> {
        instructions::mint::mint(ctx, holder, token_id, content_pointer)
    }

    /// Request permission to view a token's content. The signer is the viewer.
    pub fn request_view_cid(ctx: Context<RequestViewCid>, token_id: u64) -> Result<()> {
        instructions::request_view_cid::request_view_cid(ctx, token_id)
    }

    /// Approve a viewer's pending request. Administrator only.
    pub fn approve_viewer(
        ctx: Context<ApproveViewer>,
        viewer: Pubkey,
        token_id: u64,
    ) -> Result<()> {
        instructions::approve_viewer::approve_viewer(ctx, viewer, token_id)
    }

    /// Resolve the content pointer to a gateway URL for an approved viewer.
    /// The URL is returned as instruction return data.
    pub fn emit_cid(ctx: Context<EmitCid>, token_id: u64) -> Result<String> {
        instructions::emit_cid::emit_cid(ctx, token_id)
    }

    /// Always `true` for a minted token
    pub fn locked(ctx: Context<Locked>, token_id: u64) -> Result<bool> {
        instructions::locked::locked(ctx, token_id)
    }
}
