//! Route table for the HTTP adapter.
//!
//! ```text
//! POST   /books          GET /books/{id}   GET /books?user_id=
//! PUT    /books/{id}     DELETE /books/{id}
//! POST   /users          GET /users/{id}   DELETE /users/{id}
//! GET    /health         GET /health/live  GET /health/ready
//! ```

use actix_web::web;

use crate::inbound::http::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::inbound::http::health::{health, live, ready};
use crate::inbound::http::users::{create_user, delete_user, get_user};
use crate::inbound::http::validation::json_error_handler;

/// Register every endpoint plus the JSON extractor configuration.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` as app
/// data and usually wrap the app in [`crate::Trace`].
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use bookshelf::Trace;
/// use bookshelf::inbound::http::health::HealthState;
/// use bookshelf::inbound::http::routes::configure;
/// use bookshelf::inbound::http::state::HttpState;
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::in_memory()))
///     .app_data(web::Data::new(HealthState::new()))
///     .wrap(Trace)
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .service(create_book)
    .service(list_books)
    .service(get_book)
    .service(update_book)
    .service(delete_book)
    .service(create_user)
    .service(get_user)
    .service(delete_user)
    .service(health)
    .service(ready)
    .service(live);
}
