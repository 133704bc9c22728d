use anchor_lang::prelude::*;
use crate::errors::SoulboundError;

/// Access Request - per (token, viewer) view grant
#[account]
#[derive(Default, Debug)]
pub struct AccessRequest {
    /// Token PDA the request targets
    pub token: Pubkey,

    /// Token identifier
    pub token_id: u64,

    /// Identity asking to resolve the content pointer
    pub viewer: Pubkey,

    /// Position in the request lifecycle
    pub status: AccessStatus,

    /// Timestamp of the first request
    pub requested_ts: i64,

    /// Timestamp of approval, zero until approved
    pub approved_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl AccessRequest {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + u64 (8) + Pubkey (32)
    /// + AccessStatus (1) + i64 (8) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 32 + 8 + 32 + 1 + 8 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"access_request";

    /// Record a view request. Returns `false` when the viewer already
    /// requested (or was approved) and nothing changed.
    pub fn request(
        &mut self,
        token: Pubkey,
        token_id: u64,
        viewer: Pubkey,
        requested_ts: i64,
    ) -> bool {
        if self.status != AccessStatus::NotRequested {
            return false;
        }

        self.token = token;
        self.token_id = token_id;
        self.viewer = viewer;
        self.status = AccessStatus::Requested;
        self.requested_ts = requested_ts;

        true
    }

    /// Move a pending request to `Approved`. Returns `false` if it was already approved.
    pub fn approve(&mut self, approved_ts: i64) -> Result<bool> {
        match self.status {
            AccessStatus::NotRequested => err!(SoulboundError::RequestNotFound),
            AccessStatus::Requested => {
                self.status = AccessStatus::Approved;
                self.approved_ts = approved_ts;
                Ok(true)
            }
            AccessStatus::Approved => Ok(false),
        }
    }

    pub fn ensure_approved(&self) -> Result<()> {
        require!(
            self.status == AccessStatus::Approved,
            SoulboundError::AccessDenied
        );
        Ok(())
    }

    /// Load a request from its PDA; `None` when the viewer never asked
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        super::load_program_account::<Self>(info)
    }

    /// Persist into an already-initialized request PDA
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        super::store_program_account(info, self)
    }
}

/// Request lifecycle. Only moves forward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessStatus {
    /// No request on record
    #[default]
    NotRequested,
    /// Viewer asked, awaiting the administrator
    Requested,
    /// Viewer may resolve the content pointer
    Approved,
}
