//! # Timetable View Handlers
//!
//! Timetables are stored records served read-only: the dashboard loads the
//! department and semester pick-lists, then fetches one timetable by the
//! pair. Nothing here generates or mutates timetables.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use acadsync_core::{
    errors::AcadError,
    models::timetable::{Timetable, TimetableEntry, TimetableResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct TimetableQuery {
    pub department: Option<String>,
    pub semester: Option<String>,
}

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let departments =
        acadsync_db::repositories::timetable::list_departments(&state.db_pool)
            .await
            .map_err(AcadError::Database)?;

    Ok(Json(departments))
}

#[axum::debug_handler]
pub async fn list_semesters(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let semesters = acadsync_db::repositories::timetable::list_semesters(&state.db_pool)
        .await
        .map_err(AcadError::Database)?;

    Ok(Json(semesters))
}

#[axum::debug_handler]
pub async fn get_timetable(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TimetableQuery>,
) -> Result<Json<TimetableResponse>, AppError> {
    let department = query
        .department
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AcadError::Validation("provide a department".to_string()))?;
    let semester = query
        .semester
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AcadError::Validation("provide a semester".to_string()))?;

    let row = acadsync_db::repositories::timetable::get_timetable(
        &state.db_pool,
        department,
        semester,
    )
    .await
    .map_err(AcadError::Database)?
    .ok_or_else(|| {
        AcadError::NotFound(format!(
            "no timetable for department {department}, semester {semester}"
        ))
    })?;

    let entries: Vec<TimetableEntry> = serde_json::from_value(row.entries)
        .map_err(|err| AcadError::Internal(Box::new(err)))?;

    let data = Timetable {
        id: row.id,
        department: row.department,
        semester: row.semester,
        entries,
        created_at: row.created_at,
    };

    Ok(Json(TimetableResponse { data }))
}
