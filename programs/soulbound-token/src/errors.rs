use anchor_lang::prelude::*;

#[error_code]
pub enum SoulboundError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Token id already minted")]
    DuplicateTokenId,

    #[msg("Token not found")]
    TokenNotFound,

    #[msg("Invalid input")]
    InvalidInput,

    #[msg("Viewer is not approved for this token")]
    AccessDenied,

    #[msg("No pending view request for this viewer")]
    RequestNotFound,

    #[msg("Numerical overflow")]
    NumericalOverflow,
}
