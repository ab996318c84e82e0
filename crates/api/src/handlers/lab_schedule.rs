use axum::{extract::State, Json};
use std::sync::Arc;

use acadsync_core::{
    clock::SystemClock,
    models::lab_schedule::{CreateLabScheduleResponse, LabScheduleRequest},
    scheduler::LabScheduler,
};
use acadsync_db::directory::PgStudentDirectory;

use crate::{middleware::error_handling::AppError, ApiState};

/// Generates a lab schedule for one division.
///
/// The handler is transport glue only: it wires the scheduler to the
/// PostgreSQL-backed student directory and the system clock, and maps the
/// typed failure onto an HTTP status (validation 400, unknown division
/// 404, persistence failures 500).
#[axum::debug_handler]
pub async fn create_lab_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LabScheduleRequest>,
) -> Result<Json<CreateLabScheduleResponse>, AppError> {
    let scheduler = LabScheduler::new(
        PgStudentDirectory::new(state.db_pool.clone()),
        SystemClock,
        state.scheduler_config.clone(),
    );

    let schedule = scheduler.generate(payload).await?;

    tracing::debug!(
        "Generated {} slots for division {}",
        schedule.slots.len(),
        schedule.division
    );

    Ok(Json(CreateLabScheduleResponse {
        message: "schedule generated".to_string(),
        schedule,
    }))
}
