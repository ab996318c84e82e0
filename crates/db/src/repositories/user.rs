use crate::models::DbUser;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn find_user_by_email_and_role(
    pool: &Pool<Postgres>,
    email: &str,
    role: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Looking up user: email={}, role={}", email, role);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, role, name, email, password, usn, dob, division, created_at
        FROM users
        WHERE email = $1 AND role = $2
        "#,
    )
    .bind(email)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_student_by_usn(pool: &Pool<Postgres>, usn: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Looking up student: usn={}", usn);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, role, name, email, password, usn, dob, division, created_at
        FROM users
        WHERE usn = $1 AND role = 'student'
        "#,
    )
    .bind(usn)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// All students of a division, ascending by usn. This ordering is a
/// contract: the lab scheduler assigns batches from it without re-sorting.
pub async fn find_students_by_division(
    pool: &Pool<Postgres>,
    division: &str,
) -> Result<Vec<DbUser>> {
    tracing::debug!("Listing students for division={}", division);

    let students = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, role, name, email, password, usn, dob, division, created_at
        FROM users
        WHERE role = 'student' AND division = $1
        ORDER BY usn ASC
        "#,
    )
    .bind(division)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Found {} students in division {}",
        students.len(),
        division
    );
    Ok(students)
}

pub async fn create_admin(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, role, name, email, password)
        VALUES ($1, 'admin', $2, $3, $4)
        RETURNING id, role, name, email, password, usn, dob, division, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Admin created: id={}", user.id);
    Ok(user)
}

pub async fn create_student(
    pool: &Pool<Postgres>,
    name: &str,
    usn: &str,
    dob: Option<NaiveDate>,
    division: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, role, name, usn, dob, division)
        VALUES ($1, 'student', $2, $3, $4, $5)
        RETURNING id, role, name, email, password, usn, dob, division, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(usn)
    .bind(dob)
    .bind(division)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Student created: id={}, usn={:?}", user.id, user.usn);
    Ok(user)
}
