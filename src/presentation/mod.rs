/// Attendance records, sessions, training groups and reports
pub mod attendance;
/// Dashboard summaries
pub mod dashboard;
/// Excuse justifications
pub mod excuse;
/// Users, profiles and roles
pub mod user;
