use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the unified `users` table. Admins carry `email`/`password`,
/// students carry `usn`/`dob`/`division`; the unused columns stay NULL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub role: String,
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub usn: Option<String>,
    pub dob: Option<NaiveDate>,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub teacher_id: String,
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Timetable entries are stored as a JSONB document; the repository layer
/// decodes them into core `TimetableEntry` values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetable {
    pub id: Uuid,
    pub department: String,
    pub semester: String,
    pub entries: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
