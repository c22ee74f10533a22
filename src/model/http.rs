/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Authenticated request helper
//!
//! [`HttpClient::auth_fetch`] is the single entry point every service goes through.
//! It runs an explicit two-stage sequence:
//!
//! ```text
//! Attempt(original) --401--> Refresh --ok--> Attempt(retry)
//!                               \--fail--> return original 401
//! ```
//!
//! and never performs more than one retry.

use crate::application::config::Config;
use crate::constants::{JSON_CONTENT_TYPE, TOKEN_REFRESH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{RefreshRequest, RefreshResponse};
use crate::model::request::{RequestBody, RequestOptions};
use crate::session::TokenSession;
use crate::utils::url::resolve_url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpInternalClient, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Result of the refresh stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A usable access token is available for the retry
    Refreshed(String),
    /// No refresh token was stored; credentials were cleared
    NoRefreshToken,
    /// The refresh endpoint refused the token or could not be reached; credentials were cleared
    Rejected,
}

/// HTTP client that attaches credentials and recovers from expired access tokens
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    tokens: TokenSession,
    refresh_lock: Option<Mutex<()>>,
}

impl HttpClient {
    /// Creates a client over the given token session
    ///
    /// # Arguments
    /// * `config` - API configuration
    /// * `tokens` - Credentials the client reads and updates
    ///
    /// # Errors
    /// Returns `AppError::Network` when the underlying HTTP client cannot be built.
    pub fn new(config: Arc<Config>, tokens: TokenSession) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        let refresh_lock = config
            .refresh_policy
            .is_single_flight()
            .then(|| Mutex::new(()));

        Ok(Self {
            http_client,
            config,
            tokens,
            refresh_lock,
        })
    }

    /// Resolves a path against the configured base URL
    #[must_use]
    pub fn url(&self, path_or_url: &str) -> String {
        resolve_url(&self.config.rest_api.base_url, path_or_url)
    }

    /// Credentials used by this client
    #[must_use]
    pub fn tokens(&self) -> &TokenSession {
        &self.tokens
    }

    /// Configuration used by this client
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs a request with bearer authentication and one refresh-and-retry on `401`
    ///
    /// The returned response is the original response, the retried response after a
    /// successful refresh, or the original `401` when the session could not be
    /// recovered (in which case the stored credentials have been cleared). Non-2xx
    /// statuses are never turned into errors here.
    ///
    /// # Arguments
    /// * `path_or_url` - Path relative to the base URL, or an absolute `http(s)` URL
    /// * `options` - Method, headers and body
    ///
    /// # Errors
    /// Only transport failures of the original or retried request, and header
    /// values that cannot be encoded.
    pub async fn auth_fetch(
        &self,
        path_or_url: &str,
        options: RequestOptions,
    ) -> Result<Response, AppError> {
        let url = self.url(path_or_url);
        let access = self.tokens.access_token().await;
        let mut headers = build_headers(&options, access.as_deref())?;

        let response = self.send(&url, &options, headers.clone()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        warn!("{} {} answered 401, attempting token refresh", options.method, url);
        match self.refresh_after_unauthorized(access.as_deref()).await {
            RefreshOutcome::Refreshed(new_access) => {
                headers.insert(AUTHORIZATION, bearer(&new_access)?);
                self.send(&url, &options, headers).await
            }
            RefreshOutcome::NoRefreshToken | RefreshOutcome::Rejected => Ok(response),
        }
    }

    /// Performs a request without credentials and without refresh handling
    ///
    /// Used for endpoints that must not carry a bearer token, such as login.
    ///
    /// # Errors
    /// Transport failures only.
    pub async fn public_fetch(
        &self,
        path_or_url: &str,
        options: RequestOptions,
    ) -> Result<Response, AppError> {
        let url = self.url(path_or_url);
        let headers = build_headers(&options, None)?;
        self.send(&url, &options, headers).await
    }

    /// Authenticated request decoded as JSON
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses mapped through [`AppError::from_status`],
    /// and bodies that do not match `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path_or_url: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let response = self.auth_fetch(path_or_url, options).await?;
        parse_response(response).await
    }

    /// Authenticated GET decoded as JSON
    pub async fn get<T: DeserializeOwned>(&self, path_or_url: &str) -> Result<T, AppError> {
        self.request(path_or_url, RequestOptions::get()).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path_or_url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(path_or_url, RequestOptions::post().with_json(body)?)
            .await
    }

    /// Authenticated PATCH with a JSON body
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path_or_url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(path_or_url, RequestOptions::patch().with_json(body)?)
            .await
    }

    /// Runs the refresh stage after a `401`
    ///
    /// `stale_access` is the token the failed request carried. Under the
    /// single-flight policy a caller that finds a different token already stored
    /// once it holds the lock reuses it instead of refreshing again.
    pub async fn refresh_after_unauthorized(&self, stale_access: Option<&str>) -> RefreshOutcome {
        let Some(lock) = &self.refresh_lock else {
            return self.refresh_access_token().await;
        };

        let _guard = lock.lock().await;
        match self.tokens.access_token().await {
            Some(current) if Some(current.as_str()) != stale_access => {
                debug!("Access token was refreshed by a concurrent request, reusing it");
                RefreshOutcome::Refreshed(current)
            }
            _ => self.refresh_access_token().await,
        }
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// On success both tokens are persisted (the old refresh token is kept when the
    /// server does not rotate it). On any failure every credential is cleared.
    pub async fn refresh_access_token(&self) -> RefreshOutcome {
        let Some(refresh) = self.tokens.refresh_token().await else {
            warn!("No refresh token stored, clearing credentials");
            self.clear_credentials().await;
            return RefreshOutcome::NoRefreshToken;
        };

        match self.request_refresh(&refresh).await {
            Ok(renewed) => {
                let refresh = renewed.refresh.as_deref().unwrap_or(&refresh);
                if let Err(e) = self
                    .tokens
                    .save_tokens(Some(&renewed.access), Some(refresh))
                    .await
                {
                    error!("Failed to persist refreshed tokens: {}", e);
                }
                info!("Access token refreshed");
                RefreshOutcome::Refreshed(renewed.access)
            }
            Err(e) => {
                warn!("Token refresh failed: {}, clearing credentials", e);
                self.clear_credentials().await;
                RefreshOutcome::Rejected
            }
        }
    }

    async fn request_refresh(&self, refresh: &str) -> Result<RefreshResponse, AppError> {
        let url = self.url(TOKEN_REFRESH_PATH);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status, &body));
        }

        let renewed: RefreshResponse = response.json().await?;
        if renewed.access.is_empty() {
            return Err(AppError::Deserialization(
                "refresh response carried an empty access token".to_string(),
            ));
        }
        Ok(renewed)
    }

    async fn clear_credentials(&self) {
        if let Err(e) = self.tokens.clear_tokens().await {
            error!("Failed to clear credentials: {}", e);
        }
    }

    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        debug!("{} {}", options.method, url);

        let mut request = self
            .http_client
            .request(options.method.clone(), url)
            .headers(headers);

        request = match &options.body {
            RequestBody::Empty => request,
            RequestBody::Text(text) => request.body(text.clone()),
            RequestBody::Bytes(bytes) => request.body(bytes.clone()),
            RequestBody::Multipart(form) => request.multipart(form.to_form()?),
        };

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

/// Builds the outgoing headers for one attempt
///
/// Caller headers are copied; `Authorization` is set when an access token is
/// given; `Content-Type` defaults to JSON unless the body is multipart or the
/// caller already set one.
///
/// # Errors
/// Returns `AppError::InvalidInput` when the token cannot be encoded as a header value.
pub fn build_headers(options: &RequestOptions, access: Option<&str>) -> Result<HeaderMap, AppError> {
    let mut headers = options.headers.clone();

    if let Some(access) = access.filter(|a| !a.is_empty()) {
        headers.insert(AUTHORIZATION, bearer(access)?);
    }

    if !options.body.is_multipart() && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    Ok(headers)
}

fn bearer(access: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {access}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Decodes a successful response as JSON, mapping other statuses to errors
///
/// # Errors
/// Non-2xx statuses through [`AppError::from_status`]; undecodable bodies as
/// `AppError::Deserialization`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::from_status(status, &body));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::Deserialization(e.to_string()))
}
