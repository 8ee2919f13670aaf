//! Driving port for book mutations.
//!
//! HTTP handlers call this port to create, change and remove books without
//! importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Book, BookId, BookPatch, Error, NewBook, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksCommand: Send + Sync {
    /// Create a book owned by `owner`. The identifier is always generated.
    async fn create_book(&self, owner: UserId, draft: NewBook) -> Result<Book, Error>;

    /// Apply `patch` to an existing book and return the stored result.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the book does not exist.
    async fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Book, Error>;

    /// Remove a book.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the book does not exist.
    async fn delete_book(&self, id: BookId) -> Result<(), Error>;
}
