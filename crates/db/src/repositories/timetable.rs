use crate::models::DbTimetable;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_timetable(
    pool: &Pool<Postgres>,
    department: &str,
    semester: &str,
) -> Result<Option<DbTimetable>> {
    tracing::debug!(
        "Getting timetable: department={}, semester={}",
        department,
        semester
    );

    let timetable = sqlx::query_as::<_, DbTimetable>(
        r#"
        SELECT id, department, semester, entries, created_at
        FROM timetables
        WHERE department = $1 AND semester = $2
        "#,
    )
    .bind(department)
    .bind(semester)
    .fetch_optional(pool)
    .await?;

    Ok(timetable)
}

pub async fn list_departments(pool: &Pool<Postgres>) -> Result<Vec<String>> {
    let departments = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT department FROM timetables ORDER BY department ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(departments)
}

pub async fn list_semesters(pool: &Pool<Postgres>) -> Result<Vec<String>> {
    let semesters = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT semester FROM timetables ORDER BY semester ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(semesters)
}

/// Inserts or replaces the stored timetable for a department/semester pair.
pub async fn upsert_timetable(
    pool: &Pool<Postgres>,
    department: &str,
    semester: &str,
    entries: &serde_json::Value,
) -> Result<DbTimetable> {
    let id = Uuid::new_v4();

    let timetable = sqlx::query_as::<_, DbTimetable>(
        r#"
        INSERT INTO timetables (id, department, semester, entries)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (department, semester)
        DO UPDATE SET entries = EXCLUDED.entries
        RETURNING id, department, semester, entries, created_at
        "#,
    )
    .bind(id)
    .bind(department)
    .bind(semester)
    .bind(entries)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Timetable stored: department={}, semester={}",
        timetable.department,
        timetable.semester
    );
    Ok(timetable)
}
