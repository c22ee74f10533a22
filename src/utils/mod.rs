/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing URL resolution against the API base
pub mod url;

pub use logger::*;
pub use url::*;
