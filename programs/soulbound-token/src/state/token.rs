use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::SoulboundError;

/// Soulbound Token - binds a content pointer to its holder.
/// The holder is written once at mint and never changes.
#[account]
#[derive(Default, Debug)]
pub struct SoulboundToken {
    /// Registry that issued this token
    pub registry: Pubkey,

    /// Caller-chosen token identifier
    pub token_id: u64,

    /// Identity the token is bound to
    pub holder: Pubkey,

    /// Opaque content identifier in the external store
    pub content_pointer: String,

    /// Administrator that minted the token
    pub minted_by: Pubkey,

    /// Timestamp when minted
    pub minted_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl SoulboundToken {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + u64 (8) + Pubkey (32)
    /// + String (4 + 128) + Pubkey (32) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 32 + 8 + 32 + (4 + MAX_CONTENT_POINTER_LEN) + 32 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"token";

    /// A freshly allocated account is all zeroes; minting always records the issuer.
    pub fn is_minted(&self) -> bool {
        self.minted_by != Pubkey::default()
    }

    /// Write the token record. Never overwrites an existing token.
    pub fn issue(
        &mut self,
        token_id: u64,
        holder: Pubkey,
        content_pointer: String,
        minted_by: Pubkey,
        minted_ts: i64,
    ) -> Result<()> {
        require!(!self.is_minted(), SoulboundError::DuplicateTokenId);
        require!(holder != Pubkey::default(), SoulboundError::InvalidInput);
        require!(
            !content_pointer.is_empty() && content_pointer.len() <= MAX_CONTENT_POINTER_LEN,
            SoulboundError::InvalidInput
        );

        self.token_id = token_id;
        self.holder = holder;
        self.content_pointer = content_pointer;
        self.minted_by = minted_by;
        self.minted_ts = minted_ts;

        Ok(())
    }

    /// Gateway URL for the stored pointer
    pub fn gateway_url(&self) -> String {
        format!("{}{}", GATEWAY_URL_PREFIX, self.content_pointer)
    }

    /// Load a token from its PDA, failing with `TokenNotFound` when nothing was minted there
    pub fn load(info: &AccountInfo) -> Result<Self> {
        let token = super::load_program_account::<Self>(info)?
            .filter(Self::is_minted)
            .ok_or(SoulboundError::TokenNotFound)?;

        Ok(token)
    }
}
