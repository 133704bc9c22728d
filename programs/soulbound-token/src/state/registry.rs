use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::SoulboundError;

/// Registry State - the single authority that issues tokens and approves viewers
#[account]
#[derive(Default, Debug)]
pub struct Registry {
    /// Deployer allowed to mint and approve
    pub administrator: Pubkey,

    /// Collection name
    pub name: String,

    /// Collection symbol
    pub symbol: String,

    /// Total number of tokens issued
    pub total_minted: u64,

    /// Timestamp when created
    pub created_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Registry {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + String (4 + 32) + String (4 + 10)
    /// + u64 (8) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 32 + (4 + MAX_NAME_LEN) + (4 + MAX_SYMBOL_LEN) + 8 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    /// Bind `administrator`, which must be the program's upgrade authority
    pub fn initialize(
        &mut self,
        administrator: Pubkey,
        upgrade_authority: Option<Pubkey>,
        name: String,
        symbol: String,
        created_ts: i64,
    ) -> Result<()> {
        require!(
            upgrade_authority == Some(administrator),
            SoulboundError::Unauthorized
        );
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            SoulboundError::InvalidInput
        );
        require!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            SoulboundError::InvalidInput
        );

        self.administrator = administrator;
        self.name = name;
        self.symbol = symbol;
        self.total_minted = 0;
        self.created_ts = created_ts;

        Ok(())
    }

    /// Fails with `Unauthorized` unless `caller` is the administrator
    pub fn ensure_administrator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.administrator, SoulboundError::Unauthorized);
        Ok(())
    }

    /// Bump the issuance counter, returning the new total
    pub fn record_mint(&mut self) -> Result<u64> {
        self.total_minted = self
            .total_minted
            .checked_add(1)
            .ok_or(SoulboundError::NumericalOverflow)?;

        Ok(self.total_minted)
    }
}
