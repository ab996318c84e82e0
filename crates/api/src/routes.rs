pub mod auth;
pub mod health;
pub mod lab_schedule;
pub mod timetable;
