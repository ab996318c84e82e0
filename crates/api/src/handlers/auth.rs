//! # Sign-in Handlers
//!
//! Three sign-in flows share one shape: look the principal up, check the
//! supplied credential against the stored one, and echo a profile back.
//! Credentials are compared for plain equality against stored values;
//! there is no session or token issuance.

use axum::{extract::State, Json};
use std::sync::Arc;

use acadsync_core::{
    errors::AcadError,
    models::auth::{
        AdminSignInRequest, SignInResponse, StudentSignInRequest, TeacherProfile,
        TeacherSignInRequest, TeacherSignInResponse, UserProfile,
    },
};
use acadsync_db::models::DbUser;

use crate::{middleware::error_handling::AppError, ApiState};

fn profile_from_user(user: DbUser) -> UserProfile {
    // Stored password is deliberately not echoed
    UserProfile {
        id: user.id,
        role: user.role,
        name: user.name,
        email: user.email,
        usn: user.usn,
        dob: user.dob,
        division: user.division,
    }
}

#[axum::debug_handler]
pub async fn admin_sign_in(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AdminSignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    let admin = acadsync_db::repositories::user::find_user_by_email_and_role(
        &state.db_pool,
        &payload.email,
        "admin",
    )
    .await
    .map_err(AcadError::Database)?
    .ok_or_else(|| AcadError::Authentication("invalid email or role".to_string()))?;

    // Direct password comparison, per the stored-credential model
    if admin.password.as_deref() != Some(payload.password.as_str()) {
        tracing::debug!("Password mismatch for email={}", payload.email);
        return Err(AppError(AcadError::Authentication(
            "invalid email or password".to_string(),
        )));
    }

    Ok(Json(SignInResponse {
        message: "admin sign in successful".to_string(),
        user: profile_from_user(admin),
    }))
}

#[axum::debug_handler]
pub async fn student_sign_in(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<StudentSignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    let student =
        acadsync_db::repositories::user::find_student_by_usn(&state.db_pool, &payload.usn)
            .await
            .map_err(AcadError::Database)?
            .ok_or_else(|| AcadError::Authentication("invalid student USN".to_string()))?;

    // The date of birth is only checked when both sides carry one
    if let (Some(supplied), Some(stored)) = (&payload.dob, &student.dob) {
        if supplied != &stored.to_string() {
            return Err(AppError(AcadError::Authentication(
                "invalid date of birth".to_string(),
            )));
        }
    }

    Ok(Json(SignInResponse {
        message: "student sign in successful".to_string(),
        user: profile_from_user(student),
    }))
}

#[axum::debug_handler]
pub async fn teacher_sign_in(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<TeacherSignInRequest>,
) -> Result<Json<TeacherSignInResponse>, AppError> {
    let teacher = acadsync_db::repositories::teacher::find_teacher_by_teacher_id(
        &state.db_pool,
        &payload.teacher_id,
    )
    .await
    .map_err(AcadError::Database)?
    .ok_or_else(|| AcadError::Authentication("invalid teacher ID".to_string()))?;

    let user = TeacherProfile {
        id: teacher.id,
        teacher_id: teacher.teacher_id,
        name: teacher.name,
        email: teacher.email,
        department: teacher.department,
        created_at: teacher.created_at,
    };

    Ok(Json(TeacherSignInResponse {
        message: "teacher sign in successful".to_string(),
        user,
    }))
}
