use crate::error::AppError;
use crate::model::responses::{Page, ToggleActivationResponse};
use crate::presentation::attendance::{
    AttendanceLog, AttendanceSession, AttendanceStatus, AttendanceStatusUpdate, Ficha,
    GlobalReport,
};
use crate::presentation::dashboard::{ApprenticeSummary, InstructorSummary};
use async_trait::async_trait;

/// Interface for the attendance service
#[async_trait]
pub trait AttendanceService: Send + Sync {
    /// Gets one page of attendance records visible to the current user
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    async fn get_attendance_logs(&self, page: u32) -> Result<Page<AttendanceLog>, AppError>;

    /// Follows a `next` or `previous` link returned by a previous page
    async fn get_attendance_logs_at(&self, url: &str) -> Result<Page<AttendanceLog>, AppError>;

    /// Gets a single attendance record
    async fn get_attendance_log(&self, id: i64) -> Result<AttendanceLog, AppError>;

    /// Manually changes the status of an attendance record (instructors only)
    ///
    /// The API echoes back only the new status.
    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceStatusUpdate, AppError>;

    /// Gets the absences of the current apprentice
    async fn get_absences(&self) -> Result<Page<AttendanceLog>, AppError>;

    /// Gets the sessions visible to the current user
    async fn get_sessions(&self) -> Result<Page<AttendanceSession>, AppError>;

    /// Gets the attendance records of one session
    async fn get_session_attendance(&self, session_id: i64)
    -> Result<Vec<AttendanceLog>, AppError>;

    /// Opens or closes face recognition check-in for a session
    async fn toggle_session_activation(
        &self,
        session_id: i64,
    ) -> Result<ToggleActivationResponse, AppError>;

    /// Gets the training groups assigned to the current instructor
    async fn get_my_fichas(&self) -> Result<Page<Ficha>, AppError>;

    /// Gets the instructor dashboard summary
    async fn get_instructor_summary(&self) -> Result<InstructorSummary, AppError>;

    /// Gets the apprentice dashboard summary
    async fn get_apprentice_summary(&self) -> Result<ApprenticeSummary, AppError>;

    /// Gets the administrator report
    async fn get_global_report(&self) -> Result<GlobalReport, AppError>;
}
