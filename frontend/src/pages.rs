pub mod attendance;
pub mod attendance_dashboard;
pub mod dashboard;
pub mod events;
pub mod login;
pub mod participants;
pub mod teachers;
