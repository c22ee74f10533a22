use crate::model::responses::Page;
use crate::presentation::user::SimpleUser;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use pretty_simple_display::DisplaySimple;
use prettytable::{Cell, Row, Table, format};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance status of an apprentice for one session
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Attended on time
    Present,
    /// Did not attend
    #[default]
    Absent,
    /// Attended after the tolerance window
    Late,
    /// Absence covered by an approved excuse
    Excused,
}

impl AttendanceStatus {
    /// Human readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Excused => "Excused",
        }
    }

    /// True for statuses that count as attended
    #[must_use]
    pub fn counts_as_attended(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// One attendance record
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AttendanceLog {
    /// Record id
    pub id: i64,
    /// Id of the attendance session
    pub session: i64,
    /// Apprentice the record belongs to
    pub student: SimpleUser,
    /// Attendance status
    pub status: AttendanceStatus,
    /// Check-in time, when the apprentice checked in
    pub check_in_time: Option<DateTime<Utc>>,
    /// Whether the check-in was confirmed by face recognition
    #[serde(default)]
    pub verified_by_face: bool,
}

/// Body of the manual attendance update, echoed back as its response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceStatusUpdate {
    /// New status
    pub status: AttendanceStatus,
}

/// A scheduled class session
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSession {
    /// Session id
    pub id: i64,
    /// Id of the training group
    pub ficha: Option<i64>,
    /// Day of the session
    pub date: NaiveDate,
    /// Start time
    pub start_time: NaiveTime,
    /// End time
    pub end_time: NaiveTime,
    /// Whether face recognition check-in is open
    pub is_active: bool,
    /// Late tolerance in minutes
    #[serde(default)]
    pub permisividad: i32,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

/// A training group (ficha) and its members
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Ficha {
    /// Group id
    pub id: i64,
    /// Training program name
    pub programa_formacion: String,
    /// Group number
    pub numero_ficha: String,
    /// Instructor in charge
    pub instructor: SimpleUser,
    /// Enrolled apprentices
    #[serde(default)]
    pub students: Vec<SimpleUser>,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

/// Attendance counts per status
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AttendanceByStatus {
    /// Present records
    pub present: u64,
    /// Absent records
    pub absent: u64,
    /// Late records
    pub late: u64,
    /// Excused records
    pub excused: u64,
}

impl AttendanceByStatus {
    /// Sum over every status
    #[must_use]
    pub fn total(&self) -> u64 {
        self.present + self.absent + self.late + self.excused
    }
}

/// Administrator report (`attendance/report/global/`)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GlobalReport {
    /// Number of training groups
    pub total_fichas: u64,
    /// Number of instructors
    pub total_instructors: u64,
    /// Number of apprentices
    pub total_students: u64,
    /// Attendance counts per status
    pub attendance_by_status: AttendanceByStatus,
}

impl fmt::Display for Page<AttendanceLog> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("SESSION"),
            Cell::new("APPRENTICE"),
            Cell::new("STATUS"),
            Cell::new("CHECK-IN"),
            Cell::new("FACE"),
        ]));

        for log in &self.results {
            let check_in = log
                .check_in_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let face = if log.verified_by_face { "yes" } else { "no" };

            table.add_row(Row::new(vec![
                Cell::new(&log.id.to_string()),
                Cell::new(&log.session.to_string()),
                Cell::new(&log.student.full_name()),
                Cell::new(log.status.label()),
                Cell::new(&check_in),
                Cell::new(face),
            ]));
        }

        write!(f, "{}", table)?;
        write!(f, "{} of {} records", self.results.len(), self.count)
    }
}
