use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub administrator: Pubkey,
    pub name: String,
    pub symbol: String,
}

#[event]
pub struct TokenMinted {
    pub token_id: u64,
    pub holder: Pubkey,
}

#[event]
pub struct ViewRequested {
    pub token_id: u64,
    pub viewer: Pubkey,
}

#[event]
pub struct ViewerApproved {
    pub token_id: u64,
    pub viewer: Pubkey,
}
