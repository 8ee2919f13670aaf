//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape so handlers can reference them in
//! `#[utoipa::path]` responses.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed identifier or unparsable body.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record with the given identifier.
    #[schema(rename = "not_found")]
    NotFound,
    /// A unique field already holds the supplied value.
    #[schema(rename = "conflict")]
    Conflict,
    /// Store or infrastructure failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "book not found")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Underlying store error text, when surfaced.
    detail: Option<String>,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}
