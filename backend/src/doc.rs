//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every book, user and health endpoint together with
//! the wire schemas they reference. Domain types stay free of utoipa derives;
//! the error body is described by [`ErrorSchema`].
//!
//! Swagger UI serves the document in debug builds.

use crate::inbound::http::books::{
    BookEnvelope, BookListEnvelope, BookResponseBody, CreateBookRequestBody, UpdateBookRequestBody,
};
use crate::inbound::http::envelope::MessageResponseBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequestBody, UserEnvelope, UserResponseBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Users and the books they own."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookResponseBody,
        BookEnvelope,
        BookListEnvelope,
        CreateBookRequestBody,
        UpdateBookRequestBody,
        UserResponseBody,
        UserEnvelope,
        CreateUserRequestBody,
        MessageResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "books", description = "Book records"),
        (name = "users", description = "Users and cascade deletion"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
