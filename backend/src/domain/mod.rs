//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! layers, plus the services that implement the driving ports. Keep types
//! immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User / Book — the two stored entities.
//! - BookService / UserService — implementations of the driving ports.

pub mod book;
mod book_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::book::{
    Book, BookAuthor, BookId, BookPatch, BookTitle, BookValidationError, NewBook,
};
pub use self::book_service::BookService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, User, UserId, UserName, UserValidationError};
pub use self::user_service::UserService;

/// A user together with every book they own, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithBooks {
    pub user: User,
    pub books: Vec<Book>,
}

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bookshelf::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("book not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
