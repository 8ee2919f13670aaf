//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Domain use-case port for registering and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns a conflict error when the email is already registered.
    async fn create_user(&self, draft: NewUser) -> Result<User, Error>;

    /// Delete a user together with every book it owns.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
