//! Book API handlers.
//!
//! ```text
//! POST /books            X-User-ID: <uuid>  {"title":"Go","author":"Rob"}
//! GET /books/{id}
//! GET /books?user_id=<uuid>
//! PUT /books/{id}        {"title":"New Title"}
//! DELETE /books/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{Book, BookAuthor, BookPatch, BookTitle, NewBook};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::MessageResponseBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    lenient_owner_filter, owner_from_header, parse_book_id, parse_optional_user_id,
};

/// Book as returned by every book endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponseBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Go")]
    pub title: String,
    #[schema(example = "Rob")]
    pub author: String,
    pub user_id: String,
}

impl From<&Book> for BookResponseBody {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().as_ref().to_owned(),
            author: book.author().as_ref().to_owned(),
            user_id: book.owner().to_string(),
        }
    }
}

impl From<Book> for BookResponseBody {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}

/// Body for `POST /books`.
///
/// Missing fields default to empty strings. `id` and `userId` must be UUIDs
/// when present but their values are ignored: the id is generated and the
/// owner comes from `X-User-ID`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookRequestBody {
    pub id: Option<Uuid>,
    pub title: String,
    pub author: String,
    pub user_id: Option<Uuid>,
}

impl From<CreateBookRequestBody> for NewBook {
    fn from(body: CreateBookRequestBody) -> Self {
        Self {
            title: BookTitle::new(body.title),
            author: BookAuthor::new(body.author),
        }
    }
}

/// Body for `PUT /books/{id}`.
///
/// Absent or empty fields leave the stored value unchanged. A supplied `id`
/// must be a UUID and is otherwise ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequestBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl UpdateBookRequestBody {
    fn into_patch(self) -> ApiResult<BookPatch> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Ok(BookPatch {
            title: non_empty(self.title).map(BookTitle::new),
            author: non_empty(self.author).map(BookAuthor::new),
            owner: parse_optional_user_id(self.user_id.as_deref())?,
        })
    }
}

/// `{"data": <book>}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookEnvelope {
    pub data: BookResponseBody,
}

/// `{"data": [<book>, ...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListEnvelope {
    pub data: Vec<BookResponseBody>,
}

/// Query string accepted by `GET /books`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Owner to filter by. Malformed values are ignored.
    pub user_id: Option<String>,
}

/// Create a book owned by the user named in `X-User-ID`.
#[utoipa::path(
    post,
    path = "/books",
    request_body = CreateBookRequestBody,
    params(("X-User-ID" = String, Header, description = "Owning user identifier")),
    responses(
        (status = 201, description = "Book created", body = BookEnvelope),
        (status = 400, description = "Invalid body or user ID", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookRequestBody>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let owner = owner_from_header(&request)?;
    let book = state
        .books
        .create_book(owner, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(BookEnvelope { data: book.into() }))
}

/// Fetch a single book.
#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book", body = BookEnvelope),
        (status = 400, description = "Invalid book ID", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/books/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookEnvelope>> {
    let id = parse_book_id(&path.into_inner())?;
    let book = state.books_query.get_book(id).await?;
    Ok(web::Json(BookEnvelope { data: book.into() }))
}

/// List books, optionally restricted to one owner.
#[utoipa::path(
    get,
    path = "/books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books in store order", body = BookListEnvelope),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(
    state: web::Data<HttpState>,
    query: web::Query<ListBooksQuery>,
) -> ApiResult<web::Json<BookListEnvelope>> {
    let owner = lenient_owner_filter(query.user_id.as_deref());
    let books = state.books_query.list_books(owner).await?;
    let data = books.iter().map(BookResponseBody::from).collect();
    Ok(web::Json(BookListEnvelope { data }))
}

/// Change any subset of a book's fields.
#[utoipa::path(
    put,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    request_body = UpdateBookRequestBody,
    responses(
        (status = 200, description = "Updated book", body = BookEnvelope),
        (status = 400, description = "Invalid book ID or body", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/books/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateBookRequestBody>,
) -> ApiResult<web::Json<BookEnvelope>> {
    let id = parse_book_id(&path.into_inner())?;
    let patch = payload.into_inner().into_patch()?;
    let book = state.books.update_book(id, patch).await?;
    Ok(web::Json(BookEnvelope { data: book.into() }))
}

/// Remove a book.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponseBody),
        (status = 400, description = "Invalid book ID", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponseBody>> {
    let id = parse_book_id(&path.into_inner())?;
    state.books.delete_book(id).await?;
    Ok(web::Json(MessageResponseBody::new("book deleted successfully")))
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
