use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/departments", get(handlers::timetable::list_departments))
        .route("/api/semesters", get(handlers::timetable::list_semesters))
        .route("/api/timetable", get(handlers::timetable::get_timetable))
}
