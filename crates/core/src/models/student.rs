use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student record as returned by the directory lookup. The `usn` is the
/// university serial number, unique within an institution and the sort key
/// for every division listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub usn: String,
    pub name: String,
}
