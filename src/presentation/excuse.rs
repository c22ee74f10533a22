/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::request::MultipartForm;
use crate::presentation::attendance::AttendanceSession;
use crate::presentation::user::SimpleUser;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use prettytable::{Cell, Row, Table, format};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Review state of an excuse
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExcuseStatus {
    /// Waiting for the instructor
    #[default]
    Pending,
    /// Accepted; the attendance record becomes excused
    Approved,
    /// Refused
    Rejected,
}

impl ExcuseStatus {
    /// Human readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExcuseStatus::Pending => "Pending",
            ExcuseStatus::Approved => "Approved",
            ExcuseStatus::Rejected => "Rejected",
        }
    }

    /// True once an instructor has decided
    #[must_use]
    pub fn is_reviewed(&self) -> bool {
        !matches!(self, ExcuseStatus::Pending)
    }
}

/// An excuse justification submitted by an apprentice
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Excuse {
    /// Excuse id
    pub id: i64,
    /// Apprentice who submitted it
    pub student: SimpleUser,
    /// Session the excuse covers
    pub session: AttendanceSession,
    /// Explanation given by the apprentice
    pub reason: String,
    /// URL of the supporting document
    pub document: Option<String>,
    /// Review state
    pub status: ExcuseStatus,
    /// Id of the reviewing instructor
    pub reviewed_by: Option<i64>,
    /// Instructor comment
    pub review_comment: Option<String>,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
    /// Review timestamp
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// File attached to an excuse
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type, if known
    pub mime: Option<String>,
    /// File content
    pub content: Vec<u8>,
}

impl Attachment {
    /// Reads a file from disk, guessing its MIME type from the extension
    ///
    /// # Errors
    /// Returns `AppError::Io` when the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let mime = guess_mime(&file_name).map(String::from);
        Ok(Self {
            file_name,
            mime,
            content,
        })
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// New excuse, sent as a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct NewExcuse {
    /// Id of the session being excused
    pub session: i64,
    /// Explanation
    pub reason: String,
    /// Optional supporting document
    pub document: Option<Attachment>,
}

impl NewExcuse {
    /// Builds the multipart payload (`session`, `reason`, optional `document`)
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when the reason is blank.
    pub fn to_form(&self) -> Result<MultipartForm, AppError> {
        if self.reason.trim().is_empty() {
            return Err(AppError::InvalidInput("reason is required".to_string()));
        }
        let mut form = MultipartForm::new()
            .text("session", self.session.to_string())
            .text("reason", self.reason.clone());
        if let Some(document) = &self.document {
            form = form.file(
                "document",
                document.file_name.clone(),
                document.mime.clone(),
                document.content.clone(),
            );
        }
        Ok(form)
    }
}

/// Excuse as echoed back by the API after submission
///
/// Only the submitted fields come back; fetch the excuse list to see its id and
/// review status.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SubmittedExcuse {
    /// Session id
    pub session: i64,
    /// Reason as stored
    pub reason: String,
    /// URL of the stored document, if one was attached
    #[serde(default)]
    pub document: Option<String>,
}

/// Instructor decision on an excuse
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ExcuseReview {
    /// New status, `approved` or `rejected`
    pub status: ExcuseStatus,
    /// Optional comment for the apprentice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_comment: Option<String>,
}

impl ExcuseReview {
    /// Approves with an optional comment
    #[must_use]
    pub fn approve(comment: Option<String>) -> Self {
        Self {
            status: ExcuseStatus::Approved,
            review_comment: comment,
        }
    }

    /// Rejects with an optional comment
    #[must_use]
    pub fn reject(comment: Option<String>) -> Self {
        Self {
            status: ExcuseStatus::Rejected,
            review_comment: comment,
        }
    }

    /// A review can only approve or reject
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for the pending status.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.status.is_reviewed() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(
                "review status must be approved or rejected".to_string(),
            ))
        }
    }
}

/// Excuses rendered as a table
pub struct ExcuseTable<'a>(pub &'a [Excuse]);

impl fmt::Display for ExcuseTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("DATE"),
            Cell::new("APPRENTICE"),
            Cell::new("REASON"),
            Cell::new("STATUS"),
            Cell::new("DOCUMENT"),
        ]));

        for excuse in self.0 {
            let reason = if excuse.reason.chars().count() > 40 {
                format!("{}...", excuse.reason.chars().take(37).collect::<String>())
            } else {
                excuse.reason.clone()
            };
            let document = if excuse.document.is_some() { "yes" } else { "-" };

            table.add_row(Row::new(vec![
                Cell::new(&excuse.id.to_string()),
                Cell::new(&excuse.session.date.to_string()),
                Cell::new(&excuse.student.full_name()),
                Cell::new(&reason),
                Cell::new(excuse.status.label()),
                Cell::new(document),
            ]));
        }

        write!(f, "{}", table)
    }
}
