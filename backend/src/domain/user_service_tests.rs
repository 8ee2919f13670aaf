//! Tests for the user service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{BookPersistenceError, MockBookRepository, MockUserRepository};
use crate::domain::{Book, BookAuthor, BookTitle, Email, ErrorCode, NewBook, UserName};

type Service = UserService<MockUserRepository, MockBookRepository>;

fn make_service(users: MockUserRepository, books: MockBookRepository) -> Service {
    UserService::new(Arc::new(users), Arc::new(books))
}

#[fixture]
fn draft() -> NewUser {
    NewUser {
        name: UserName::new("Ann"),
        email: Email::new("ann@x.com"),
    }
}

#[fixture]
fn user(draft: NewUser) -> User {
    User::register(draft)
}

#[rstest]
#[tokio::test]
async fn create_user_inserts_when_email_is_free(draft: NewUser) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq(draft.email.clone()))
        .times(1)
        .return_once(|_| Ok(None));
    users.expect_insert().times(1).return_once(|_| Ok(()));

    let created = make_service(users, MockBookRepository::new())
        .create_user(draft)
        .await
        .expect("user created");

    assert_eq!(created.name().as_ref(), "Ann");
    assert_eq!(created.email().as_ref(), "ann@x.com");
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_taken_email_before_writing(draft: NewUser, user: User) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(user)));
    users.expect_insert().never();

    let error = make_service(users, MockBookRepository::new())
        .create_user(draft)
        .await
        .expect_err("duplicate email");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "user with this email already exists");
}

#[rstest]
#[tokio::test]
async fn create_user_maps_unique_violation_to_conflict(draft: NewUser) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    users
        .expect_insert()
        .return_once(|_| Err(UserPersistenceError::duplicate_email("ann@x.com")));

    let error = make_service(users, MockBookRepository::new())
        .create_user(draft)
        .await
        .expect_err("lost race");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn create_user_store_failure_is_internal(draft: NewUser) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    users
        .expect_insert()
        .return_once(|_| Err(UserPersistenceError::connection("refused")));

    let error = make_service(users, MockBookRepository::new())
        .create_user(draft)
        .await
        .expect_err("store down");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "failed to create user");
}

#[rstest]
#[tokio::test]
async fn get_user_loads_owned_books(user: User) {
    let id = user.id().clone();
    let book = Book::create(
        NewBook {
            title: BookTitle::new("Go"),
            author: BookAuthor::new("Rob"),
        },
        id.clone(),
    );
    let expected_books = vec![book];
    let returned_books = expected_books.clone();

    let mut users = MockUserRepository::new();
    let stored = user.clone();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(stored)));
    let mut books = MockBookRepository::new();
    books
        .expect_list()
        .with(eq(BookFilter::owned_by(id.clone())))
        .times(1)
        .return_once(move |_| Ok(returned_books));

    let loaded = make_service(users, books)
        .get_user(id)
        .await
        .expect("user loaded");

    assert_eq!(loaded.user, user);
    assert_eq!(loaded.books, expected_books);
}

#[rstest]
#[tokio::test]
async fn get_user_missing_record_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().return_once(|_| Ok(None));
    let mut books = MockBookRepository::new();
    books.expect_list().never();

    let error = make_service(users, books)
        .get_user(UserId::random())
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "user not found");
}

#[rstest]
#[tokio::test]
async fn get_user_book_failure_is_internal(user: User) {
    let id = user.id().clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(user)));
    let mut books = MockBookRepository::new();
    books
        .expect_list()
        .return_once(|_| Err(BookPersistenceError::query("timeout")));

    let error = make_service(users, books)
        .get_user(id)
        .await
        .expect_err("books unavailable");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn delete_user_missing_record_skips_cascade() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().return_once(|_| Ok(None));
    users.expect_delete_with_books().never();

    let error = make_service(users, MockBookRepository::new())
        .delete_user(UserId::random())
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(Ok(false), ErrorCode::NotFound, "user not found")]
#[case(
    Err(UserPersistenceError::book_cascade("lock timeout")),
    ErrorCode::InternalError,
    "failed to delete user's books"
)]
#[case(
    Err(UserPersistenceError::query("lock timeout")),
    ErrorCode::InternalError,
    "failed to delete user"
)]
#[tokio::test]
async fn delete_user_maps_cascade_outcomes(
    user: User,
    #[case] outcome: Result<bool, UserPersistenceError>,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let id = user.id().clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(user)));
    users
        .expect_delete_with_books()
        .with(eq(id.clone()))
        .times(1)
        .return_once(move |_| outcome);

    let error = make_service(users, MockBookRepository::new())
        .delete_user(id)
        .await
        .expect_err("delete rejected");

    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn delete_user_succeeds_after_cascade(user: User) {
    let id = user.id().clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(user)));
    users
        .expect_delete_with_books()
        .times(1)
        .return_once(|_| Ok(true));

    make_service(users, MockBookRepository::new())
        .delete_user(id)
        .await
        .expect("user deleted");
}
