pub mod auth;
pub mod lab_schedule;
pub mod student;
pub mod timetable;
