//! Port abstraction for book persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Book, BookId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "book repository query failed: {message}",
    }
}

/// Selection applied when listing books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Restrict results to books owned by this user.
    pub owner: Option<UserId>,
}

impl BookFilter {
    /// Filter matching every book owned by `owner`.
    pub fn owned_by(owner: UserId) -> Self {
        Self { owner: Some(owner) }
    }

    /// Whether `book` passes the filter.
    pub fn matches(&self, book: &Book) -> bool {
        self.owner.as_ref().is_none_or(|owner| book.owner() == owner)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book record.
    async fn insert(&self, book: &Book) -> Result<(), BookPersistenceError>;

    /// Fetch a book by identifier.
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookPersistenceError>;

    /// List books matching `filter` in creation order.
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookPersistenceError>;

    /// Overwrite the stored fields of an existing book.
    ///
    /// Returns `false` when the book no longer exists.
    async fn update(&self, book: &Book) -> Result<bool, BookPersistenceError>;

    /// Delete a book. Returns `false` when it did not exist.
    async fn delete(&self, id: &BookId) -> Result<bool, BookPersistenceError>;
}
