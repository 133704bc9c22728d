pub mod initialize_registry;
pub mod mint;
pub mod request_view_cid;
pub mod approve_viewer;
pub mod emit_cid;
pub mod locked;

pub use initialize_registry::*;
pub use mint::*;
pub use request_view_cid::*;
pub use approve_viewer::*;
pub use emit_cid::*;
pub use locked::*;
