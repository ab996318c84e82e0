use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table (admins and students share it, keyed by role)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            role VARCHAR(32) NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            password VARCHAR(255) NULL,
            usn VARCHAR(64) NULL UNIQUE,
            dob DATE NULL,
            division VARCHAR(64) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            teacher_id VARCHAR(64) NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            department VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create timetables table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS timetables (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            department VARCHAR(255) NOT NULL,
            semester VARCHAR(64) NOT NULL,
            entries JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT uniq_department_semester UNIQUE (department, semester)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_users_role_division ON users(role, division);
        CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
        CREATE INDEX IF NOT EXISTS idx_users_usn ON users(usn);
        CREATE INDEX IF NOT EXISTS idx_teachers_teacher_id ON teachers(teacher_id);
        CREATE INDEX IF NOT EXISTS idx_timetables_department ON timetables(department);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
