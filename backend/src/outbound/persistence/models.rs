//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. `created_at` is left to the column default
//! and only used for ordering, so no row struct reads it.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Book, BookAuthor, BookId, BookTitle, Email, User, UserId, UserName};

use super::schema::{books, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::from_uuid(row.id),
            UserName::new(row.name),
            Email::new(row.email),
        )
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
        }
    }
}

/// Row struct for reading from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub user_id: Uuid,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(
            BookId::from_uuid(row.id),
            BookTitle::new(row.title),
            BookAuthor::new(row.author),
            UserId::from_uuid(row.user_id),
        )
    }
}

/// Insertable struct for creating new book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub author: &'a str,
    pub user_id: Uuid,
}

impl<'a> From<&'a Book> for NewBookRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            id: *book.id().as_uuid(),
            title: book.title().as_ref(),
            author: book.author().as_ref(),
            user_id: *book.owner().as_uuid(),
        }
    }
}

/// Changeset for overwriting the mutable book columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = books)]
pub(crate) struct BookUpdate<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub user_id: Uuid,
}

impl<'a> From<&'a Book> for BookUpdate<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: book.title().as_ref(),
            author: book.author().as_ref(),
            user_id: *book.owner().as_uuid(),
        }
    }
}
