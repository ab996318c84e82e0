use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/admin", post(handlers::auth::admin_sign_in))
        .route("/api/auth/student", post(handlers::auth::student_sign_in))
        .route("/api/auth/teacher", post(handlers::auth::teacher_sign_in))
}
