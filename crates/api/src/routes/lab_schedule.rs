use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/lab-schedules",
        post(handlers::lab_schedule::create_lab_schedule),
    )
}
