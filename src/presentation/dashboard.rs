use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Instructor dashboard figures (`attendance/dashboard/instructor/summary/`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InstructorSummary {
    /// Training groups assigned to the instructor
    pub total_assigned_fichas: u64,
    /// Sessions scheduled for today
    pub today_sessions: u64,
    /// Excuses waiting for review
    pub pending_excuses: u64,
    /// Apprentices across the assigned groups
    pub total_students_in_assigned_fichas: u64,
    /// Attendance records in the instructor's groups
    pub total_attendances_recorded: u64,
}

/// Apprentice dashboard figures (`attendance/dashboard/apprentice/summary/`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ApprenticeSummary {
    /// Share of sessions attended (present, late or excused), 0 to 100
    pub attendance_percentage: f64,
    /// Upcoming sessions not yet attended
    pub upcoming_sessions: u64,
    /// Excuses waiting for review
    pub pending_excuses: u64,
    /// Late arrivals
    pub late_count: u64,
    /// Absences
    pub absent_count: u64,
}

impl ApprenticeSummary {
    /// True when the apprentice has excuses or absences that need attention
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.pending_excuses > 0 || self.absent_count > 0
    }
}
