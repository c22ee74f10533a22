/// Attendance service interface
pub mod attendance;
/// Excuse service interface
pub mod excuse;
/// Profile service interface
pub mod profile;
