/// Gateway every resolved content pointer is appended to
pub const GATEWAY_URL_PREFIX: &str = "https://ipfs.io/ipfs/";

/// Longest content pointer a token may carry, in bytes
pub const MAX_CONTENT_POINTER_LEN: usize = 128;

pub const MAX_NAME_LEN: usize = 32;

pub const MAX_SYMBOL_LEN: usize = 10;
