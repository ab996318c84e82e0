use acadsync_core::errors::AcadError;
use acadsync_core::models::timetable::{Timetable, TimetableEntry, TimetableResponse};
use mockall::predicate;

use crate::test_utils::{timetable_row, TestContext};
use acadsync_api::middleware::error_handling::AppError;

// Mirrors the get_timetable handler: validate the query pair, fetch the
// stored row, decode the JSONB entries.
async fn get_timetable_wrapper(
    ctx: &mut TestContext,
    department: Option<&'static str>,
    semester: Option<&'static str>,
) -> Result<TimetableResponse, AppError> {
    let department = department
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AcadError::Validation("provide a department".to_string()))?;
    let semester = semester
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AcadError::Validation("provide a semester".to_string()))?;

    let row = ctx
        .timetable_repo
        .get_timetable(department, semester)
        .await
        .map_err(AcadError::Database)?
        .ok_or_else(|| {
            AcadError::NotFound(format!(
                "no timetable for department {department}, semester {semester}"
            ))
        })?;

    let entries: Vec<TimetableEntry> = serde_json::from_value(row.entries)
        .map_err(|err| AcadError::Internal(Box::new(err)))?;

    Ok(TimetableResponse {
        data: Timetable {
            id: row.id,
            department: row.department,
            semester: row.semester,
            entries,
            created_at: row.created_at,
        },
    })
}

#[tokio::test]
async fn returns_decoded_timetable_under_data_key() {
    let mut ctx = TestContext::new();
    let row = timetable_row("CSE", "5");

    ctx.timetable_repo
        .expect_get_timetable()
        .with(predicate::eq("CSE"), predicate::eq("5"))
        .returning(move |_, _| Ok(Some(row.clone())));

    let response = get_timetable_wrapper(&mut ctx, Some("CSE"), Some("5"))
        .await
        .unwrap();

    assert_eq!(response.data.department, "CSE");
    assert_eq!(response.data.entries.len(), 1);
    assert_eq!(response.data.entries[0].subject, "Operating Systems");
}

#[tokio::test]
async fn missing_query_parameters_fail_validation_without_a_lookup() {
    let mut ctx = TestContext::new();
    // No expectation registered: a lookup would panic the mock

    let err = get_timetable_wrapper(&mut ctx, None, Some("5"))
        .await
        .unwrap_err();
    assert!(matches!(err.0, AcadError::Validation(_)));

    let err = get_timetable_wrapper(&mut ctx, Some("CSE"), None)
        .await
        .unwrap_err();
    assert!(matches!(err.0, AcadError::Validation(_)));
}

#[tokio::test]
async fn unknown_pair_maps_to_not_found() {
    let mut ctx = TestContext::new();

    ctx.timetable_repo
        .expect_get_timetable()
        .returning(|_, _| Ok(None));

    let err = get_timetable_wrapper(&mut ctx, Some("ECE"), Some("3"))
        .await
        .unwrap_err();

    assert!(matches!(err.0, AcadError::NotFound(_)));
}

#[tokio::test]
async fn listing_endpoints_pass_through_repository_results() {
    let mut ctx = TestContext::new();

    ctx.timetable_repo
        .expect_list_departments()
        .returning(|| Ok(vec!["CSE".to_string(), "ECE".to_string()]));
    ctx.timetable_repo
        .expect_list_semesters()
        .returning(|| Ok(vec!["3".to_string(), "5".to_string()]));

    let departments = ctx.timetable_repo.list_departments().await.unwrap();
    let semesters = ctx.timetable_repo.list_semesters().await.unwrap();

    assert_eq!(departments, vec!["CSE", "ECE"]);
    assert_eq!(semesters, vec!["3", "5"]);
}
