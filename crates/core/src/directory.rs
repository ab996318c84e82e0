use async_trait::async_trait;

use crate::errors::AcadResult;
use crate::models::student::Student;

/// Read-side persistence contract the lab scheduler depends on.
///
/// Implementations must return every student of the requested division,
/// ordered ascending by `usn`. The scheduler does not re-sort; batch
/// membership is fully determined by this ordering.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn find_students_by_division(&self, division: &str) -> AcadResult<Vec<Student>>;
}
