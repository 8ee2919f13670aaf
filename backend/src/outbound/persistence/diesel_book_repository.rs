//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookFilter, BookPersistenceError, BookRepository};
use crate::domain::{Book, BookId};

use super::error_mapping::{StoreFailure, classify};
use super::models::{BookRow, BookUpdate, NewBookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel-backed implementation of the [`BookRepository`] port.
///
/// Listing orders rows by `created_at` then `id` so output is stable across
/// calls.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookPersistenceError {
    BookPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: DieselError, operation: &str) -> BookPersistenceError {
    match classify(error, operation) {
        StoreFailure::Connection(message) => BookPersistenceError::connection(message),
        StoreFailure::UniqueViolation(message) | StoreFailure::Query(message) => {
            BookPersistenceError::query(message)
        }
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn insert(&self, book: &Book) -> Result<(), BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(books::table)
            .values(NewBookRow::from(book))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "insert book"))
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BookRow> = books::table
            .find(id.as_uuid())
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find book"))?;
        Ok(row.map(Book::from))
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = books::table
            .select(BookRow::as_select())
            .order_by((books::created_at, books::id))
            .into_boxed();
        if let Some(owner) = &filter.owner {
            query = query.filter(books::user_id.eq(*owner.as_uuid()));
        }

        let rows: Vec<BookRow> = query
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list books"))?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn update(&self, book: &Book) -> Result<bool, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::update(books::table.find(book.id().as_uuid()))
            .set(BookUpdate::from(book))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update book"))?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: &BookId) -> Result<bool, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(books::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete book"))?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for book repository error mapping.
    use super::*;
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection() {
        let error = map_pool_error(PoolError::build("bad url"));
        assert_eq!(error, BookPersistenceError::connection("bad url"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        let error = map_diesel_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("server closed the connection".to_string()),
            ),
            "list books",
        );
        assert_eq!(
            error,
            BookPersistenceError::connection("server closed the connection")
        );
    }

    #[rstest]
    fn query_failure_keeps_driver_text() {
        let error = map_diesel_error(DieselError::NotFound, "find book");
        assert!(error.to_string().contains("Record not found"));
    }
}
