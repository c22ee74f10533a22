/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! # Face Log Client
//!
//! Authenticated client for the Face Log attendance API.
//!
//! The heart of the crate is [`model::http::HttpClient::auth_fetch`], which attaches
//! the stored bearer token to every request and, when the API answers `401`, silently
//! exchanges the refresh token for a new access token and replays the request once.
//!
//! On top of it sit typed services for attendance logs, excuse justifications and
//! profile data, plus the login / registration flows.
//!
//! ```ignore
//! use facelog_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.auth().login("apprentice", "secret").await?;
//! let summary = client.get_apprentice_summary().await?;
//! ```

/// Application layer: configuration, authentication flows and service implementations
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and the authenticated HTTP helper
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain models returned by the API and their table rendering
pub mod presentation;
/// Token storage and session accessors
pub mod session;
/// Environment, logging and URL utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
