use acadsync_core::errors::AcadError;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use acadsync_api::middleware::error_handling::AppError;

#[tokio::test]
async fn maps_domain_errors_to_expected_status_codes() {
    let cases = vec![
        (
            AcadError::Validation("bad input".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AcadError::Authentication("bad credentials".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            AcadError::NotFound("missing".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            AcadError::Database(eyre::eyre!("connection refused")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AcadError::Internal(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "boom",
            ))),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        let response = AppError(err).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn serializes_the_error_message_under_an_error_key() {
    let response =
        AppError(AcadError::NotFound("no timetable".to_string())).into_response();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["error"], "Resource not found: no timetable");
}

#[tokio::test]
async fn eyre_reports_convert_into_database_errors() {
    let err: AppError = eyre::eyre!("pool exhausted").into();

    assert!(matches!(err.0, AcadError::Database(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
