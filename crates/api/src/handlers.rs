pub mod auth;
pub mod lab_schedule;
pub mod timetable;
