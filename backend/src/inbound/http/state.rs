//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookRepository, BooksCommand, BooksQuery, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{BookService, UserService};
use crate::outbound::memory::InMemoryStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BooksCommand>,
    pub books_query: Arc<dyn BooksQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshelf::inbound::http::state::HttpState;
    /// use bookshelf::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::with_repositories(store.clone(), store);
    /// let _books = state.books_query.clone();
    /// ```
    pub fn with_repositories<U, B>(users: Arc<U>, books: Arc<B>) -> Self
    where
        U: UserRepository + 'static,
        B: BookRepository + 'static,
    {
        let book_service = Arc::new(BookService::new(books.clone()));
        let user_service = Arc::new(UserService::new(users, books));
        Self {
            books: book_service.clone(),
            books_query: book_service,
            users: user_service.clone(),
            users_query: user_service,
        }
    }

    /// State backed by a fresh [`InMemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::with_repositories(store.clone(), store)
    }
}
