/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Login, registration and logout flows
//!
//! Obtaining tokens goes through [`HttpClient::public_fetch`] so a stale access
//! token is never sent with credentials. Everything after login goes through the
//! authenticated helper.

use crate::constants::{LOGIN_PATH, PROFILE_PATH, REGISTER_STUDENT_PATH, TOKEN_OBTAIN_PATH};
use crate::error::AppError;
use crate::model::auth::{LoginRequest, RegisterStudentRequest, RegisteredStudent, TokenPair};
use crate::model::http::{HttpClient, parse_response};
use crate::model::request::RequestOptions;
use crate::presentation::user::{Role, UserProfile};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authentication flows over a shared [`HttpClient`]
#[derive(Clone)]
pub struct Auth {
    http_client: Arc<HttpClient>,
}

impl Auth {
    /// Creates the authentication flows for a client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Logs in with a username and password
    ///
    /// Stores the token pair, then fetches the profile and caches its role.
    /// If the profile cannot be fetched the new tokens are discarded again.
    ///
    /// # Errors
    /// `AppError::Unauthorized` for rejected credentials, any other mapped status
    /// error, transport failures and store failures.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, AppError> {
        info!("Logging in as {}", username);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http_client
            .public_fetch(TOKEN_OBTAIN_PATH, RequestOptions::post().with_json(&body)?)
            .await?;
        let pair: TokenPair = parse_response(response).await?;

        let tokens = self.http_client.tokens();
        tokens
            .save_tokens(Some(&pair.access), Some(&pair.refresh))
            .await?;

        let profile: UserProfile = match self.http_client.get(PROFILE_PATH).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Profile lookup after login failed: {}", e);
                if let Err(clear_err) = tokens.clear_tokens().await {
                    error!("Failed to discard tokens: {}", clear_err);
                }
                return Err(e);
            }
        };
        tokens.set_role(&profile.role).await?;

        info!("Logged in as {} ({})", profile.username, profile.role);
        Ok(profile)
    }

    /// Logs in with the credentials found in the configuration
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the username or password is not configured,
    /// otherwise the same errors as [`Auth::login`].
    pub async fn login_from_config(&self) -> Result<UserProfile, AppError> {
        let credentials = &self.http_client.config().credentials;
        let (Some(username), Some(password)) = (&credentials.username, &credentials.password)
        else {
            return Err(AppError::InvalidInput(
                "FACELOG_USERNAME and FACELOG_PASSWORD must be set".to_string(),
            ));
        };
        self.login(username, password).await
    }

    /// Registers a new apprentice account
    ///
    /// The password confirmation is checked before anything is sent.
    ///
    /// # Errors
    /// `AppError::InvalidInput` for local validation failures,
    /// `AppError::BadRequest` carrying the server's field errors, transport failures.
    pub async fn register_student(
        &self,
        request: &RegisterStudentRequest,
    ) -> Result<RegisteredStudent, AppError> {
        request.validate()?;
        debug!("Registering apprentice {}", request.username);
        let response = self
            .http_client
            .public_fetch(
                REGISTER_STUDENT_PATH,
                RequestOptions::post().with_json(request)?,
            )
            .await?;
        parse_response(response).await
    }

    /// Forgets every stored credential
    ///
    /// # Errors
    /// Store failures.
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.http_client.tokens().clear_tokens().await
    }

    /// True when an access token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.tokens().is_authenticated().await
    }

    /// Cached role of the logged-in user
    pub async fn role(&self) -> Option<Role> {
        self.http_client.tokens().role().await
    }

    /// Route the user should be sent to
    ///
    /// The login route when not authenticated, otherwise the dashboard for the
    /// cached role.
    pub async fn landing_path(&self) -> &'static str {
        if !self.is_authenticated().await {
            return LOGIN_PATH;
        }
        self.role().await.unwrap_or_default().landing_path()
    }
}
