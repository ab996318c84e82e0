use acadsync_core::directory::StudentDirectory;
use acadsync_core::errors::{AcadError, AcadResult};
use acadsync_core::models::student::Student;
use async_trait::async_trait;

use crate::{repositories, DbPool};

/// PostgreSQL-backed implementation of the scheduler's directory contract.
/// The ascending-usn ordering comes from the underlying query.
#[derive(Clone)]
pub struct PgStudentDirectory {
    pool: DbPool,
}

impl PgStudentDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentDirectory for PgStudentDirectory {
    async fn find_students_by_division(&self, division: &str) -> AcadResult<Vec<Student>> {
        let rows = repositories::user::find_students_by_division(&self.pool, division)
            .await
            .map_err(AcadError::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| Student {
                id: row.id,
                usn: row.usn.unwrap_or_default(),
                name: row.name,
            })
            .collect())
    }
}
