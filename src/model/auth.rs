/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Body of `POST auth/token/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// Token pair returned by `POST auth/token/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    /// Short-lived bearer credential
    pub access: String,
    /// Long-lived credential used to mint new access tokens
    pub refresh: String,
}

/// Body of `POST auth/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshRequest {
    /// Stored refresh token
    pub refresh: String,
}

/// Success body of `POST auth/token/refresh/`
///
/// The server may rotate the refresh token; when it does not, `refresh` is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    /// Newly issued access token
    pub access: String,
    /// Rotated refresh token, if any
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body of `POST auth/register/student/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterStudentRequest {
    /// Desired username
    pub username: String,
    /// Password
    pub password: String,
    /// Password confirmation, must equal `password`
    pub password2: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Institutional student identifier
    pub student_id: String,
    /// Number of the training group (ficha) to enroll in
    pub ficha_numero: String,
}

impl RegisterStudentRequest {
    /// Checks the fields the client can verify on its own
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when a required field is empty or the
    /// password confirmation does not match.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("username", &self.username),
            ("password", &self.password),
            ("ficha_numero", &self.ficha_numero),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::InvalidInput(format!("{field} is required")));
        }
        if self.password != self.password2 {
            return Err(AppError::InvalidInput("passwords do not match".to_string()));
        }
        Ok(())
    }
}

/// Account created by `POST auth/register/student/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisteredStudent {
    /// Username
    pub username: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Institutional student identifier
    #[serde(default)]
    pub student_id: Option<String>,
}
