use acadsync_core::clock::Clock;
use acadsync_core::directory::StudentDirectory;
use acadsync_core::errors::AcadResult;
use acadsync_core::models::lab_schedule::{
    CreateLabScheduleResponse, LabScheduleRequest, SchedulerConfig,
};
use acadsync_core::models::student::Student;
use acadsync_core::scheduler::LabScheduler;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

struct StubDirectory(Vec<Student>);

#[async_trait]
impl StudentDirectory for StubDirectory {
    async fn find_students_by_division(&self, _division: &str) -> AcadResult<Vec<Student>> {
        Ok(self.0.clone())
    }
}

struct StubClock;

impl Clock for StubClock {
    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 11, 24, 8, 0, 0).unwrap()
    }
}

fn students(count: usize) -> Vec<Student> {
    (1..=count)
        .map(|n| Student {
            id: Uuid::new_v4(),
            usn: format!("1AC21CS{n:03}"),
            name: format!("Student {n}"),
        })
        .collect()
}

// The handler flattens the schedule next to the confirmation message;
// the dashboard reads `division`, `labs`, and `slots` off the top level.
#[tokio::test]
async fn response_flattens_schedule_fields_next_to_message() {
    let scheduler = LabScheduler::new(
        StubDirectory(students(4)),
        StubClock,
        SchedulerConfig::default(),
    );

    let schedule = scheduler
        .generate(LabScheduleRequest {
            labs: Some(vec!["Chemistry".to_string()]),
            division: Some("A".to_string()),
            batch_count_per_lab: Some(2),
            batch_duration_minutes: Some(60),
            start_time: Some("2025-11-25T09:00:00Z".to_string()),
        })
        .await
        .unwrap();

    let response = CreateLabScheduleResponse {
        message: "schedule generated".to_string(),
        schedule,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["message"], "schedule generated");
    assert_eq!(value["division"], "A");
    assert_eq!(value["batchCountPerLab"], 2);
    assert_eq!(value["slots"].as_array().unwrap().len(), 2);
    assert_eq!(value["slots"][0]["students"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn wire_request_shape_drives_the_scheduler_end_to_end() {
    let scheduler = LabScheduler::new(
        StubDirectory(students(6)),
        StubClock,
        SchedulerConfig::default(),
    );

    // Exactly what the dashboard posts
    let raw = r#"{
        "labs": ["Lab1", "Lab2", "Lab3"],
        "division": "B",
        "batchCountPerLab": 1,
        "batchDurationMinutes": 30,
        "startTime": "2025-11-25T10:00:00Z"
    }"#;
    let request: LabScheduleRequest = serde_json::from_str(raw).unwrap();

    let schedule = scheduler.generate(request).await.unwrap();

    assert_eq!(schedule.slots.len(), 3);
    assert_eq!(schedule.batch_duration_minutes, 30);
    let sizes: Vec<usize> = schedule.slots.iter().map(|s| s.students.len()).collect();
    assert_eq!(sizes, vec![2, 2, 2]);
}
