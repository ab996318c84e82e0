use acadsync_db::mock::repositories::{MockTeacherRepo, MockTimetableRepo, MockUserRepo};
use acadsync_db::models::{DbTeacher, DbTimetable, DbUser};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;

pub struct TestContext {
    pub user_repo: MockUserRepo,
    pub teacher_repo: MockTeacherRepo,
    pub timetable_repo: MockTimetableRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            user_repo: MockUserRepo::new(),
            teacher_repo: MockTeacherRepo::new(),
            timetable_repo: MockTimetableRepo::new(),
        }
    }
}

pub fn admin_row(email: &str, password: &str) -> DbUser {
    DbUser {
        id: Uuid::new_v4(),
        role: "admin".to_string(),
        name: "Admin".to_string(),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        usn: None,
        dob: None,
        division: None,
        created_at: Utc::now(),
    }
}

pub fn student_row(usn: &str, name: &str, division: &str, dob: Option<NaiveDate>) -> DbUser {
    DbUser {
        id: Uuid::new_v4(),
        role: "student".to_string(),
        name: name.to_string(),
        email: None,
        password: None,
        usn: Some(usn.to_string()),
        dob,
        division: Some(division.to_string()),
        created_at: Utc::now(),
    }
}

pub fn teacher_row(teacher_id: &str, name: &str) -> DbTeacher {
    DbTeacher {
        id: Uuid::new_v4(),
        teacher_id: teacher_id.to_string(),
        name: name.to_string(),
        email: None,
        department: Some("CSE".to_string()),
        created_at: Utc::now(),
    }
}

pub fn timetable_row(department: &str, semester: &str) -> DbTimetable {
    DbTimetable {
        id: Uuid::new_v4(),
        department: department.to_string(),
        semester: semester.to_string(),
        entries: json!([
            {
                "day": "Monday",
                "startTime": "09:00",
                "endTime": "10:00",
                "subject": "Operating Systems",
                "teacher": "T042"
            }
        ]),
        created_at: Utc::now(),
    }
}
