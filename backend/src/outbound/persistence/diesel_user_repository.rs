//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, User, UserId};

use super::error_mapping::{StoreFailure, classify};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{books, users};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: DieselError, operation: &str) -> UserPersistenceError {
    match classify(error, operation) {
        StoreFailure::Connection(message) => UserPersistenceError::connection(message),
        StoreFailure::UniqueViolation(message) | StoreFailure::Query(message) => {
            UserPersistenceError::query(message)
        }
    }
}

fn map_insert_error(error: DieselError, email: &Email) -> UserPersistenceError {
    match classify(error, "insert user") {
        StoreFailure::UniqueViolation(_) => UserPersistenceError::duplicate_email(email.as_ref()),
        StoreFailure::Connection(message) => UserPersistenceError::connection(message),
        StoreFailure::Query(message) => UserPersistenceError::query(message),
    }
}

/// Failure inside the cascade transaction, tagged with the step that failed.
#[derive(Debug)]
enum CascadeStepError {
    Books(DieselError),
    User(DieselError),
    Missing,
    Transaction(DieselError),
}

impl From<DieselError> for CascadeStepError {
    fn from(error: DieselError) -> Self {
        Self::Transaction(error)
    }
}

impl CascadeStepError {
    fn into_outcome(self) -> Result<bool, UserPersistenceError> {
        match self {
            Self::Missing => Ok(false),
            Self::Books(error) => Err(match classify(error, "delete user books") {
                StoreFailure::Connection(message) => UserPersistenceError::connection(message),
                StoreFailure::UniqueViolation(message) | StoreFailure::Query(message) => {
                    UserPersistenceError::book_cascade(message)
                }
            }),
            Self::User(error) | Self::Transaction(error) => {
                Err(map_diesel_error(error, "delete user"))
            }
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, user.email()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user by id"))?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user by email"))?;
        Ok(row.map(User::from))
    }

    async fn delete_with_books(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let user_id = *id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let result = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(books::table.filter(books::user_id.eq(user_id)))
                        .execute(conn)
                        .await
                        .map_err(CascadeStepError::Books)?;

                    let removed = diesel::delete(users::table.find(user_id))
                        .execute(conn)
                        .await
                        .map_err(CascadeStepError::User)?;

                    // Roll back the book removal when the user is already gone.
                    if removed == 0 {
                        return Err(CascadeStepError::Missing);
                    }
                    Ok::<bool, CascadeStepError>(true)
                }
                .scope_boxed()
            })
            .await;

        match result {
            Ok(found) => Ok(found),
            Err(step) => step.into_outcome(),
        }
    }
}
