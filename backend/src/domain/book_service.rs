//! Book domain service.
//!
//! Implements [`BooksCommand`] and [`BooksQuery`] over a [`BookRepository`],
//! translating persistence failures into client-facing domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    BookFilter, BookPersistenceError, BookRepository, BooksCommand, BooksQuery,
};
use crate::domain::{Book, BookId, BookPatch, Error, NewBook, UserId};

/// Book service implementing the book driving ports.
#[derive(Clone)]
pub struct BookService<R> {
    books: Arc<R>,
}

impl<R> BookService<R> {
    /// Create a new service over the given repository.
    pub fn new(books: Arc<R>) -> Self {
        Self { books }
    }
}

impl<R> BookService<R>
where
    R: BookRepository,
{
    fn store_failure(message: &'static str, err: &BookPersistenceError) -> Error {
        error!(error = %err, "{message}");
        Error::internal(message)
    }

    async fn fetch(&self, id: &BookId) -> Result<Book, Error> {
        self.books
            .find_by_id(id)
            .await
            .map_err(|err| Self::store_failure("could not fetch book", &err))?
            .ok_or_else(|| Error::not_found("book not found"))
    }
}

#[async_trait]
impl<R> BooksCommand for BookService<R>
where
    R: BookRepository,
{
    async fn create_book(&self, owner: UserId, draft: NewBook) -> Result<Book, Error> {
        let book = Book::create(draft, owner);
        if let Err(err) = self.books.insert(&book).await {
            error!(error = %err, book_id = %book.id(), "error creating book");
            return Err(Error::internal("error creating book").with_detail(err.to_string()));
        }
        Ok(book)
    }

    async fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Book, Error> {
        let updated = self.fetch(&id).await?.apply(patch);
        let found = self
            .books
            .update(&updated)
            .await
            .map_err(|err| Self::store_failure("update failed", &err))?;
        if !found {
            return Err(Error::not_found("book not found"));
        }
        Ok(updated)
    }

    async fn delete_book(&self, id: BookId) -> Result<(), Error> {
        let found = self
            .books
            .delete(&id)
            .await
            .map_err(|err| Self::store_failure("delete failed", &err))?;
        if found {
            Ok(())
        } else {
            Err(Error::not_found("book not found"))
        }
    }
}

#[async_trait]
impl<R> BooksQuery for BookService<R>
where
    R: BookRepository,
{
    async fn get_book(&self, id: BookId) -> Result<Book, Error> {
        self.fetch(&id).await
    }

    async fn list_books(&self, owner: Option<UserId>) -> Result<Vec<Book>, Error> {
        let filter = BookFilter { owner };
        self.books
            .list(&filter)
            .await
            .map_err(|err| Self::store_failure("could not fetch books", &err))
    }
}

#[cfg(test)]
#[path = "book_service_tests.rs"]
mod tests;
