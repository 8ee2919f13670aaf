//! Driving port for user-facing queries.
//!
//! Inbound adapters use this port to fetch a user and its books in one call.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserWithBooks};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch a user with its owned books eagerly loaded.
    async fn get_user(&self, id: UserId) -> Result<UserWithBooks, Error>;
}
