//! In-process store implementing both repository ports.
//!
//! Records live in insertion order behind one mutex, so listing order matches
//! creation order and the cascade delete is atomic with respect to other
//! callers. Email uniqueness is enforced on insert the same way the
//! PostgreSQL unique constraint is.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    BookFilter, BookPersistenceError, BookRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Book, BookId, Email, User, UserId};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    books: Vec<Book>,
}

/// Shared in-memory store. Clone the surrounding `Arc` to share it between
/// the user and book ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> Result<MutexGuard<'_, StoreState>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query(POISONED))
    }

    fn books(&self) -> Result<MutexGuard<'_, StoreState>, BookPersistenceError> {
        self.state
            .lock()
            .map_err(|_| BookPersistenceError::query(POISONED))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut state = self.users()?;
        if state.users.iter().any(|u| u.email() == user.email()) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.users()?;
        Ok(state.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let state = self.users()?;
        Ok(state.users.iter().find(|u| u.email() == email).cloned())
    }

    async fn delete_with_books(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.users()?;
        let Some(index) = state.users.iter().position(|u| u.id() == id) else {
            return Ok(false);
        };
        state.books.retain(|book| book.owner() != id);
        state.users.remove(index);
        Ok(true)
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn insert(&self, book: &Book) -> Result<(), BookPersistenceError> {
        self.books()?.books.push(book.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookPersistenceError> {
        let state = self.books()?;
        Ok(state.books.iter().find(|b| b.id() == *id).cloned())
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookPersistenceError> {
        let state = self.books()?;
        Ok(state
            .books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn update(&self, book: &Book) -> Result<bool, BookPersistenceError> {
        let mut state = self.books()?;
        match state.books.iter_mut().find(|b| b.id() == book.id()) {
            Some(slot) => {
                *slot = book.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &BookId) -> Result<bool, BookPersistenceError> {
        let mut state = self.books()?;
        let before = state.books.len();
        state.books.retain(|b| b.id() != *id);
        Ok(state.books.len() != before)
    }
}
