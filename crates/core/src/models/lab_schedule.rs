use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::student::Student;

/// Request to generate a lab schedule for one division.
///
/// Every field is optional at the wire level so that missing values reach
/// the scheduler and fail with a `Validation` error rather than a JSON
/// deserialization rejection. `start_time` is an RFC 3339 string; when
/// absent the schedule starts today at the configured wall-clock time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabScheduleRequest {
    #[serde(default)]
    pub labs: Option<Vec<String>>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub batch_count_per_lab: Option<u32>,
    #[serde(default)]
    pub batch_duration_minutes: Option<u32>,
    #[serde(default)]
    pub start_time: Option<String>,
}

/// One lab session: a batch of students in a lab for one time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSlot {
    pub lab: String,
    /// 1-based, unique within a lab.
    pub batch_number: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub students: Vec<Student>,
}

/// A fully populated schedule, echoing the parameters it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSchedule {
    pub division: String,
    pub labs: Vec<String>,
    pub batch_count_per_lab: u32,
    pub batch_duration_minutes: u32,
    pub slots: Vec<LabSlot>,
}

/// Wire response for schedule generation: a confirmation message with the
/// schedule fields flattened alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabScheduleResponse {
    pub message: String,
    #[serde(flatten)]
    pub schedule: LabSchedule,
}

/// Defaults applied when a request omits sizing or timing parameters.
///
/// Carried explicitly (on the application state, handed to the scheduler)
/// rather than as module-level constants so tests can override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub default_batch_count: u32,
    pub default_batch_duration_minutes: u32,
    pub default_start_hour: u32,
    pub default_start_minute: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_batch_count: 3,
            default_batch_duration_minutes: 60,
            default_start_hour: 9,
            default_start_minute: 0,
        }
    }
}
