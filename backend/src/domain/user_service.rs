//! User domain service.
//!
//! Registration checks the email before writing and still treats a unique
//! violation on insert as a conflict, so concurrent duplicates are rejected
//! either way. Deletion cascades to owned books atomically through
//! [`UserRepository::delete_with_books`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    BookFilter, BookRepository, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, NewUser, User, UserId, UserWithBooks};

const DUPLICATE_EMAIL: &str = "user with this email already exists";

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<U, B> {
    users: Arc<U>,
    books: Arc<B>,
}

impl<U, B> UserService<U, B> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, books: Arc<B>) -> Self {
        Self { users, books }
    }
}

impl<U, B> UserService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    fn store_failure(message: &'static str, err: &UserPersistenceError) -> Error {
        error!(error = %err, "{message}");
        Error::internal(message)
    }

    async fn fetch(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| Self::store_failure("could not fetch user", &err))?
            .ok_or_else(|| Error::not_found("user not found"))
    }
}

#[async_trait]
impl<U, B> UsersCommand for UserService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    async fn create_user(&self, draft: NewUser) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(&draft.email)
            .await
            .map_err(|err| Self::store_failure("failed to create user", &err))?;
        if existing.is_some() {
            return Err(Error::conflict(DUPLICATE_EMAIL));
        }

        let user = User::register(draft);
        match self.users.insert(&user).await {
            Ok(()) => Ok(user),
            Err(UserPersistenceError::DuplicateEmail { .. }) => Err(Error::conflict(DUPLICATE_EMAIL)),
            Err(err) => Err(Self::store_failure("failed to create user", &err)),
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.fetch(&id).await?;
        match self.users.delete_with_books(&id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::not_found("user not found")),
            Err(err @ UserPersistenceError::BookCascade { .. }) => {
                Err(Self::store_failure("failed to delete user's books", &err))
            }
            Err(err) => Err(Self::store_failure("failed to delete user", &err)),
        }
    }
}

#[async_trait]
impl<U, B> UsersQuery for UserService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    async fn get_user(&self, id: UserId) -> Result<UserWithBooks, Error> {
        let user = self.fetch(&id).await?;
        let books = self
            .books
            .list(&BookFilter::owned_by(id))
            .await
            .map_err(|err| {
                error!(error = %err, "could not fetch books");
                Error::internal("could not fetch books")
            })?;
        Ok(UserWithBooks { user, books })
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
