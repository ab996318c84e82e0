pub mod teacher;
pub mod timetable;
pub mod user;
