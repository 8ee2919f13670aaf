//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifier parsing failures always surface as `invalid_request` so a
//! malformed path id yields 400 and never reaches the store.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use tracing::debug;

use crate::domain::{BookId, Error, UserId};

/// Request header naming the user a new book belongs to.
pub const USER_ID_HEADER: &str = "X-User-ID";

pub(crate) fn invalid_book_id() -> Error {
    Error::invalid_request("invalid book ID")
}

pub(crate) fn invalid_user_id() -> Error {
    Error::invalid_request("invalid user ID")
}

pub(crate) fn parse_book_id(raw: &str) -> Result<BookId, Error> {
    BookId::new(raw).map_err(|_| invalid_book_id())
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| invalid_user_id())
}

/// Read the owning user from [`USER_ID_HEADER`].
///
/// A missing header, non-ASCII value or malformed UUID are all rejected.
pub(crate) fn owner_from_header(req: &HttpRequest) -> Result<UserId, Error> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(invalid_user_id)?;
    let raw = value.to_str().map_err(|_| invalid_user_id())?;
    parse_user_id(raw)
}

/// Parse an optional owner reference from a request body.
///
/// Absent, empty and nil-UUID values mean "unchanged".
pub(crate) fn parse_optional_user_id(raw: Option<&str>) -> Result<Option<UserId>, Error> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => {
            let id = parse_user_id(raw)?;
            Ok((!id.as_uuid().is_nil()).then_some(id))
        }
    }
}

/// Parse the `user_id` list filter. Malformed values disable the filter.
pub(crate) fn lenient_owner_filter(raw: Option<&str>) -> Option<UserId> {
    let raw = raw.filter(|value| !value.is_empty())?;
    match UserId::new(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(value = raw, error = %err, "ignoring malformed user_id filter");
            None
        }
    }
}

/// Convert JSON extractor failures into the standard error body.
///
/// Registered through `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}
