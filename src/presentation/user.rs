/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use crate::constants::{APPRENTICE_LANDING_PATH, INSTRUCTOR_LANDING_PATH};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user
///
/// Used for client-side navigation only; the API enforces authorization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Apprentice enrolled in one or more training groups
    #[default]
    Student,
    /// Instructor in charge of training groups
    Instructor,
    /// Administrator
    Admin,
    /// Any role this client does not know about
    Other(String),
}

impl Role {
    /// Wire value of the role
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
            Role::Other(other) => other,
        }
    }

    /// True for the instructor role
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        matches!(self, Role::Instructor)
    }

    /// Dashboard route the user lands on after login
    ///
    /// Instructors go to the instructor dashboard, everyone else to the apprentice one.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        if self.is_instructor() {
            INSTRUCTOR_LANDING_PATH
        } else {
            APPRENTICE_LANDING_PATH
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "student" => Role::Student,
            "instructor" => Role::Instructor,
            "admin" => Role::Admin,
            _ => Role::Other(value.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short user reference embedded in other resources
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SimpleUser {
    /// User id
    pub id: i64,
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
}

impl SimpleUser {
    /// First and last name, or the username when both are empty
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Profile of the authenticated user (`auth/profile/`)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User id
    pub id: i64,
    /// Username
    pub username: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Role, read-only on the server
    #[serde(default)]
    pub role: Role,
    /// Institutional student identifier
    #[serde(default)]
    pub student_id: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl UserProfile {
    /// First and last name, or the username when both are empty
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Editable profile fields; unset fields are left unchanged
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    /// New first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

fn default_true() -> bool {
    true
}

fn full_name(first: &str, last: &str, username: &str) -> String {
    let name = format!("{} {}", first.trim(), last.trim());
    let name = name.trim();
    if name.is_empty() {
        username.to_string()
    } else {
        name.to_string()
    }
}
