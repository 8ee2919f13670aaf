//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("fixture trace id is a valid UUID")
}

#[rstest]
#[case(Error::invalid_request("invalid book ID"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("book not found"), ErrorCode::NotFound)]
#[case(Error::conflict("user with this email already exists"), ErrorCode::Conflict)]
#[case(Error::internal("update failed"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::not_found("user not found").try_with_trace_id(" ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_message_under_error_key() {
    let error = Error::internal("error creating book").with_detail("connection reset");
    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "error": "error creating book",
            "code": "internal_error",
            "detail": "connection reset",
        })
    );
}

#[rstest]
fn omits_empty_optional_fields() {
    let value = serde_json::to_value(Error::not_found("book not found")).expect("serialise");
    let object = value.as_object().expect("object payload");
    assert!(!object.contains_key("detail"));
    assert!(!object.contains_key("traceId"));
}

#[rstest]
fn deserialises_wire_payload() {
    let payload = json!({
        "error": "invalid user ID",
        "code": "invalid_request",
        "traceId": TRACE_ID,
    });
    let error: Error = serde_json::from_value(payload).expect("valid payload");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "invalid user ID");
    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.detail(), None);
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let payload = json!({ "error": "", "code": "not_found" });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}

#[rstest]
#[tokio::test]
async fn deserialisation_ignores_ambient_trace(trace_id: TraceId) {
    let payload: Value = json!({ "error": "book not found", "code": "not_found" });
    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(payload).expect("valid payload")
    })
    .await;
    assert!(error.trace_id().is_none());
}
