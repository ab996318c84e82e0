use crate::models::DbTeacher;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn find_teacher_by_teacher_id(
    pool: &Pool<Postgres>,
    teacher_id: &str,
) -> Result<Option<DbTeacher>> {
    tracing::debug!("Looking up teacher: teacher_id={}", teacher_id);

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, teacher_id, name, email, department, created_at
        FROM teachers
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .fetch_optional(pool)
    .await?;

    Ok(teacher)
}

pub async fn create_teacher(
    pool: &Pool<Postgres>,
    teacher_id: &str,
    name: &str,
    email: Option<&str>,
    department: Option<&str>,
) -> Result<DbTeacher> {
    let id = Uuid::new_v4();

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, teacher_id, name, email, department)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, teacher_id, name, email, department, created_at
        "#,
    )
    .bind(id)
    .bind(teacher_id)
    .bind(name)
    .bind(email)
    .bind(department)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Teacher created: id={}, teacher_id={}", teacher.id, teacher.teacher_id);
    Ok(teacher)
}
