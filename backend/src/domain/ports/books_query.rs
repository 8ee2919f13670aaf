//! Driving port for book reads.

use async_trait::async_trait;

use crate::domain::{Book, BookId, Error, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksQuery: Send + Sync {
    /// Fetch a single book.
    async fn get_book(&self, id: BookId) -> Result<Book, Error>;

    /// List every book, or only those owned by `owner` when given.
    async fn list_books(&self, owner: Option<UserId>) -> Result<Vec<Book>, Error>;
}
