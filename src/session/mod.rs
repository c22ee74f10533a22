/// Token storage backends
pub mod store;
/// Session accessors over a token store
pub mod tokens;

pub use store::{FileTokenStore, MemoryTokenStore, StoredTokens, TokenSlot, TokenStore};
pub use tokens::TokenSession;
