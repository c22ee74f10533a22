/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! # Face Log Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use facelog_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api");
//! let client = Client::new(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Face Log API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Refresh coordination policy
pub use crate::model::refresh::RefreshPolicy;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Login, registration and logout flows
pub use crate::application::auth::Auth;

/// Token storage and session accessors
pub use crate::session::{FileTokenStore, MemoryTokenStore, TokenSession, TokenSlot, TokenStore};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// API client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    attendance::AttendanceService, excuse::ExcuseService, profile::ProfileService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Authenticated request helper
pub use crate::model::http::{HttpClient, RefreshOutcome, build_headers, parse_response};

/// Request description
pub use crate::model::request::{FormPart, MultipartForm, RequestBody, RequestOptions};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication bodies
pub use crate::model::auth::{
    LoginRequest, RefreshResponse, RegisterStudentRequest, RegisteredStudent, TokenPair,
};

/// Pagination envelopes
pub use crate::model::responses::{Listing, Page, ToggleActivationResponse};

/// Attendance models
pub use crate::presentation::attendance::{
    AttendanceByStatus, AttendanceLog, AttendanceSession, AttendanceStatus,
    AttendanceStatusUpdate, Ficha, GlobalReport,
};

/// Dashboard summaries
pub use crate::presentation::dashboard::{ApprenticeSummary, InstructorSummary};

/// Excuse models
pub use crate::presentation::excuse::{
    Attachment, Excuse, ExcuseReview, ExcuseStatus, ExcuseTable, NewExcuse, SubmittedExcuse,
};

/// User models
pub use crate::presentation::user::{ProfileUpdate, Role, SimpleUser, UserProfile};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// URL helpers
pub use crate::utils::url::{is_absolute_url, normalize_base_url, resolve_url};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
