//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("invalid book ID"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("book not found"), StatusCode::NOT_FOUND)]
#[case(
    Error::conflict("user with this email already exists"),
    StatusCode::CONFLICT
)]
#[case(Error::internal("update failed"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace header is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let value = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, value)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_message_and_detail() {
    let error = Error::internal("error creating book")
        .with_detail("connection reset")
        .with_trace_id(TRACE_ID);

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "error": "error creating book",
            "code": "internal_error",
            "detail": "connection reset",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (status, header, body) = body_of(&Error::invalid_request("invalid user ID")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(
        body,
        json!({ "error": "invalid user ID", "code": "invalid_request" })
    );
}
