//! # Lab Batch Scheduler
//!
//! Deterministically partitions a division's students into time-boxed lab
//! batches. One invocation performs a single directory read followed by
//! pure computation; identical inputs over an identical student set always
//! produce an identical schedule.
//!
//! ## Algorithm
//!
//! 1. Validate the request and resolve defaults from [`SchedulerConfig`].
//! 2. Fetch the division's students, ordered ascending by `usn`.
//! 3. Build `labs × batch_count` empty slots in lab-major, batch-minor
//!    order; the slot at flattened index `i` starts `i` batch durations
//!    after the base start.
//! 4. Consume students in order: the student at position `idx` lands in
//!    slot `idx / students_per_batch`, where `students_per_batch` is the
//!    ceiling of `student_count / total_batches`.
//!
//! When the ceiling division overshoots, the computed index can point past
//! the final slot; those students are appended to the last slot. That
//! overflow-to-last-slot behavior is a documented policy, not an error.

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::directory::StudentDirectory;
use crate::errors::{AcadError, AcadResult};
use crate::models::lab_schedule::{LabSchedule, LabScheduleRequest, LabSlot, SchedulerConfig};

pub struct LabScheduler<D, C> {
    directory: D,
    clock: C,
    config: SchedulerConfig,
}

impl<D: StudentDirectory, C: Clock> LabScheduler<D, C> {
    pub fn new(directory: D, clock: C, config: SchedulerConfig) -> Self {
        Self {
            directory,
            clock,
            config,
        }
    }

    pub async fn generate(&self, request: LabScheduleRequest) -> AcadResult<LabSchedule> {
        // STEP 1: Validation & Defaults

        let labs = request
            .labs
            .filter(|labs| !labs.is_empty())
            .ok_or_else(|| AcadError::Validation("provide a non-empty labs list".to_string()))?;

        let division = request
            .division
            .as_deref()
            .map(str::trim)
            .filter(|division| !division.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AcadError::Validation("provide a division".to_string()))?;

        let batch_count = request
            .batch_count_per_lab
            .unwrap_or(self.config.default_batch_count);
        if batch_count == 0 {
            return Err(AcadError::Validation(
                "batch count per lab must be positive".to_string(),
            ));
        }

        let batch_duration_minutes = request
            .batch_duration_minutes
            .unwrap_or(self.config.default_batch_duration_minutes);
        if batch_duration_minutes == 0 {
            return Err(AcadError::Validation(
                "batch duration must be positive".to_string(),
            ));
        }

        let base_start = self.base_start(request.start_time.as_deref())?;

        // STEP 2: Student Lookup

        let students = self
            .directory
            .find_students_by_division(&division)
            .await?;
        if students.is_empty() {
            return Err(AcadError::NotFound(format!(
                "no students found for division {division}"
            )));
        }

        // STEP 3: Slot Construction

        let total_batches = labs.len() * batch_count as usize;
        let students_per_batch = students.len().div_ceil(total_batches);

        let batch_duration = Duration::minutes(i64::from(batch_duration_minutes));
        let mut slots = Vec::with_capacity(total_batches);
        for (lab_index, lab) in labs.iter().enumerate() {
            for batch_index in 0..batch_count as usize {
                let flattened = lab_index * batch_count as usize + batch_index;
                let start_time = base_start + batch_duration * flattened as i32;
                slots.push(LabSlot {
                    lab: lab.clone(),
                    batch_number: batch_index as u32 + 1,
                    start_time,
                    end_time: start_time + batch_duration,
                    students: Vec::new(),
                });
            }
        }

        // STEP 4: Assignment

        // Students arrive sorted by usn and are consumed in that order, so
        // concatenating the slots reproduces the directory ordering.
        let last_slot = slots.len() - 1;
        for (idx, student) in students.into_iter().enumerate() {
            let slot_index = (idx / students_per_batch).min(last_slot);
            slots[slot_index].students.push(student);
        }

        Ok(LabSchedule {
            division,
            labs,
            batch_count_per_lab: batch_count,
            batch_duration_minutes,
            slots,
        })
    }

    /// Resolves the base start: an explicit RFC 3339 timestamp when given,
    /// otherwise today (per the injected clock) at the configured
    /// wall-clock time with seconds zeroed.
    fn base_start(&self, raw: Option<&str>) -> AcadResult<DateTime<Utc>> {
        match raw {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|start| start.with_timezone(&Utc))
                .map_err(|_| AcadError::Validation("invalid start time".to_string())),
            None => {
                let now = self.clock.now();
                let wall = now
                    .date_naive()
                    .and_hms_opt(
                        self.config.default_start_hour,
                        self.config.default_start_minute,
                        0,
                    )
                    .ok_or_else(|| {
                        AcadError::Validation("invalid default start time".to_string())
                    })?;
                wall.and_local_timezone(now.timezone())
                    .earliest()
                    .map(|start| start.with_timezone(&Utc))
                    .ok_or_else(|| {
                        AcadError::Internal(
                            "default start time does not exist in the local time zone".into(),
                        )
                    })
            }
        }
    }
}
