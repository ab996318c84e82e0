use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored class timetable for one department/semester pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub id: Uuid,
    pub department: String,
    pub semester: String,
    pub entries: Vec<TimetableEntry>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Wrapper the dashboard expects: the timetable lives under a `data` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    pub data: Timetable,
}
