/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::attendance::AttendanceService;
use crate::application::interfaces::excuse::ExcuseService;
use crate::application::interfaces::profile::ProfileService;
use crate::constants::PROFILE_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::request::RequestOptions;
use crate::model::responses::{Listing, Page, ToggleActivationResponse};
use crate::presentation::attendance::{
    AttendanceLog, AttendanceSession, AttendanceStatus, AttendanceStatusUpdate, Ficha,
    GlobalReport,
};
use crate::presentation::dashboard::{ApprenticeSummary, InstructorSummary};
use crate::presentation::excuse::{Excuse, ExcuseReview, NewExcuse, SubmittedExcuse};
use crate::presentation::user::{ProfileUpdate, UserProfile};
use crate::session::{FileTokenStore, TokenSession};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Face Log API client
///
/// Every service call goes through the authenticated request helper, so an
/// expired access token is refreshed transparently.
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client whose credentials live in memory
    ///
    /// # Errors
    /// Returns `AppError::Network` when the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_session(config, TokenSession::in_memory())
    }

    /// Creates a client using the token store the configuration asks for
    ///
    /// When `token_file` is set the tokens are loaded from and persisted to that
    /// file, otherwise they live in memory.
    ///
    /// # Errors
    /// Token file and HTTP client construction failures.
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let session = match &config.token_file {
            Some(path) => {
                debug!("Using token file {}", path);
                TokenSession::new(Arc::new(FileTokenStore::open(path).await?))
            }
            None => TokenSession::in_memory(),
        };
        Self::with_session(config, session)
    }

    /// Creates a client over an existing token session
    ///
    /// # Errors
    /// Returns `AppError::Network` when the HTTP client cannot be built.
    pub fn with_session(config: Config, tokens: TokenSession) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(Arc::new(config), tokens)?);
        Ok(Self { http_client })
    }

    /// Login, registration and logout flows
    #[must_use]
    pub fn auth(&self) -> Auth {
        Auth::new(Arc::clone(&self.http_client))
    }

    /// The underlying authenticated HTTP helper
    #[must_use]
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Credentials used by this client
    #[must_use]
    pub fn tokens(&self) -> &TokenSession {
        self.http_client.tokens()
    }

    async fn get_listing<T>(&self, path: &str) -> Result<Page<T>, AppError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let listing: Listing<T> = self.http_client.get(path).await?;
        Ok(listing.into_page())
    }
}

#[async_trait]
impl AttendanceService for Client {
    async fn get_attendance_logs(&self, page: u32) -> Result<Page<AttendanceLog>, AppError> {
        let path = format!("attendance/attendance-logs/?page={}", page.max(1));
        debug!("Getting attendance logs page {}", page);
        self.get_listing(&path).await
    }

    async fn get_attendance_logs_at(&self, url: &str) -> Result<Page<AttendanceLog>, AppError> {
        self.get_listing(url).await
    }

    async fn get_attendance_log(&self, id: i64) -> Result<AttendanceLog, AppError> {
        let path = format!("attendance/attendance-logs/{id}/");
        self.http_client.get(&path).await
    }

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceStatusUpdate, AppError> {
        let path = format!("attendance/attendance-log/{id}/update/");
        info!("Setting attendance record {} to {}", id, status.label());
        self.http_client
            .patch(&path, &AttendanceStatusUpdate { status })
            .await
    }

    async fn get_absences(&self) -> Result<Page<AttendanceLog>, AppError> {
        self.get_listing("attendance/absences/").await
    }

    async fn get_sessions(&self) -> Result<Page<AttendanceSession>, AppError> {
        self.get_listing("attendance/sessions/").await
    }

    async fn get_session_attendance(
        &self,
        session_id: i64,
    ) -> Result<Vec<AttendanceLog>, AppError> {
        let path = format!("attendance/sessions/{session_id}/attendance-log/");
        let listing: Listing<AttendanceLog> = self.http_client.get(&path).await?;
        Ok(listing.into_vec())
    }

    async fn toggle_session_activation(
        &self,
        session_id: i64,
    ) -> Result<ToggleActivationResponse, AppError> {
        let path = format!("attendance/sessions/{session_id}/toggle-activation/");
        let toggled: ToggleActivationResponse = self
            .http_client
            .request(&path, RequestOptions::post())
            .await?;
        info!(
            "Session {} check-in is now {}",
            session_id,
            if toggled.is_active { "open" } else { "closed" }
        );
        Ok(toggled)
    }

    async fn get_my_fichas(&self) -> Result<Page<Ficha>, AppError> {
        self.get_listing("attendance/my-fichas/").await
    }

    async fn get_instructor_summary(&self) -> Result<InstructorSummary, AppError> {
        self.http_client
            .get("attendance/dashboard/instructor/summary/")
            .await
    }

    async fn get_apprentice_summary(&self) -> Result<ApprenticeSummary, AppError> {
        self.http_client
            .get("attendance/dashboard/apprentice/summary/")
            .await
    }

    async fn get_global_report(&self) -> Result<GlobalReport, AppError> {
        self.http_client.get("attendance/report/global/").await
    }
}

#[async_trait]
impl ExcuseService for Client {
    async fn get_excuses(&self) -> Result<Page<Excuse>, AppError> {
        self.get_listing("excuses/excuses/").await
    }

    async fn get_excuse(&self, id: i64) -> Result<Excuse, AppError> {
        let path = format!("excuses/excuses/{id}/");
        self.http_client.get(&path).await
    }

    async fn submit_excuse(&self, excuse: &NewExcuse) -> Result<SubmittedExcuse, AppError> {
        let form = excuse.to_form()?;
        info!("Submitting excuse for session {}", excuse.session);
        self.http_client
            .request("excuses/excuses/", RequestOptions::post().with_form(form))
            .await
    }

    async fn review_excuse(
        &self,
        id: i64,
        review: &ExcuseReview,
    ) -> Result<ExcuseReview, AppError> {
        review.validate()?;
        let path = format!("excuses/excuses/{id}/");
        info!("Marking excuse {} as {}", id, review.status.label());
        self.http_client.patch(&path, review).await
    }
}

#[async_trait]
impl ProfileService for Client {
    async fn get_profile(&self) -> Result<UserProfile, AppError> {
        self.http_client.get(PROFILE_PATH).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AppError> {
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "profile update has no fields".to_string(),
            ));
        }
        self.http_client.patch(PROFILE_PATH, update).await
    }
}
