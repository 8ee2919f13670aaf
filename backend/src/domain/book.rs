//! Book data model and partial-update semantics.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Validation errors returned by [`BookId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    #[error("book id must not be empty")]
    EmptyId,
    #[error("book id must be a valid UUID")]
    InvalidId,
}

/// Stable book identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(Uuid);

impl BookId {
    /// Validate and construct a [`BookId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BookValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(BookValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(BookValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| BookValidationError::InvalidId)
    }

    /// Generate a new random [`BookId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID already validated by the store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for BookId {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Book title. Free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Book author. Free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}

impl AsRef<str> for BookAuthor {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Caller-supplied fields for creating a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: BookTitle,
    pub author: BookAuthor,
}

/// Fields to change on an existing book.
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub author: Option<BookAuthor>,
    pub owner: Option<UserId>,
}

/// A book owned by a user.
///
/// ## Invariants
/// - `id` is assigned once, by [`Book::create`], and never changes.
/// - `owner` is a reference only; the user it names may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    owner: UserId,
}

impl Book {
    /// Rebuild a [`Book`] from stored components.
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, owner: UserId) -> Self {
        Self {
            id,
            title,
            author,
            owner,
        }
    }

    /// Build a fresh book with a newly generated identifier.
    ///
    /// # Examples
    /// ```
    /// use bookshelf::domain::{Book, BookAuthor, BookTitle, NewBook, UserId};
    ///
    /// let owner = UserId::random();
    /// let book = Book::create(
    ///     NewBook {
    ///         title: BookTitle::new("Go"),
    ///         author: BookAuthor::new("Rob"),
    ///     },
    ///     owner.clone(),
    /// );
    /// assert_eq!(book.owner(), &owner);
    /// ```
    pub fn create(draft: NewBook, owner: UserId) -> Self {
        let NewBook { title, author } = draft;
        Self::new(BookId::random(), title, author, owner)
    }

    /// Return the book with every field present in `patch` replaced.
    pub fn apply(self, patch: BookPatch) -> Self {
        let BookPatch {
            title,
            author,
            owner,
        } = patch;
        Self {
            id: self.id,
            title: title.unwrap_or(self.title),
            author: author.unwrap_or(self.author),
            owner: owner.unwrap_or(self.owner),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
