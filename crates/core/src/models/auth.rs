use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSignInRequest {
    pub email: String,
    pub password: String,
}

/// Student sign-in: USN plus an optional date of birth (`YYYY-MM-DD`).
/// The dob is only checked when both the request and the record carry one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSignInRequest {
    pub usn: String,
    #[serde(default)]
    pub dob: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSignInRequest {
    /// Wire name kept as the dashboard sends it.
    #[serde(rename = "teacherID")]
    pub teacher_id: String,
}

/// A user as echoed back after sign-in. Never carries the stored password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub role: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub id: Uuid,
    #[serde(rename = "teacherID")]
    pub teacher_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSignInResponse {
    pub message: String,
    pub user: TeacherProfile,
}
