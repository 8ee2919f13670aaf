//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Command`, `*Query`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod books_command;
mod books_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookFilter, BookPersistenceError, BookRepository};
#[cfg(test)]
pub use books_command::MockBooksCommand;
pub use books_command::BooksCommand;
#[cfg(test)]
pub use books_query::MockBooksQuery;
pub use books_query::BooksQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
