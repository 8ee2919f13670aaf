//! User API handlers.
//!
//! ```text
//! POST /users {"name":"Ann","email":"ann@x.com"}
//! GET /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, Email, NewUser, User, UserName, UserWithBooks};
use crate::inbound::http::ApiResult;
use crate::inbound::http::books::BookResponseBody;
use crate::inbound::http::envelope::MessageResponseBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Body for `POST /users`. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequestBody {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
}

impl From<CreateUserRequestBody> for NewUser {
    fn from(body: CreateUserRequestBody) -> Self {
        Self {
            name: UserName::new(body.name),
            email: Email::new(body.email),
        }
    }
}

/// User with the books they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponseBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub books: Vec<BookResponseBody>,
}

impl UserResponseBody {
    fn from_parts(user: &User, books: &[Book]) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().as_ref().to_owned(),
            email: user.email().as_ref().to_owned(),
            books: books.iter().map(BookResponseBody::from).collect(),
        }
    }
}

impl From<User> for UserResponseBody {
    fn from(user: User) -> Self {
        Self::from_parts(&user, &[])
    }
}

impl From<UserWithBooks> for UserResponseBody {
    fn from(value: UserWithBooks) -> Self {
        Self::from_parts(&value.user, &value.books)
    }
}

/// `{"data": <user>}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub data: UserResponseBody,
}

/// Register a user. Email addresses must be unique.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequestBody,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequestBody>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserEnvelope { data: user.into() }))
}

/// Fetch a user with every book they own.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User with books", body = UserEnvelope),
        (status = 400, description = "Invalid user ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let id = parse_user_id(&path.into_inner())?;
    let found = state.users_query.get_user(id).await?;
    Ok(web::Json(UserEnvelope { data: found.into() }))
}

/// Delete a user and, in the same transaction, every book they own.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponseBody),
        (status = 400, description = "Invalid user ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponseBody>> {
    let id = parse_user_id(&path.into_inner())?;
    state.users.delete_user(id).await?;
    Ok(web::Json(MessageResponseBody::new("user deleted successfully")))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
