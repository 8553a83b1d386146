//! Route definitions for the people resource.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /                    -> list (?page=&per_page=)
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/starships      -> list_starships
/// GET    /{id}/vehicles       -> list_vehicles
/// ```
///
/// Every response carries `content-type: application/json`, empty 204s
/// included.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list).post(people::create))
        .route(
            "/{id}",
            get(people::get_by_id)
                .put(people::update)
                .delete(people::delete),
        )
        .route("/{id}/starships", get(people::list_starships))
        .route("/{id}/vehicles", get(people::list_vehicles))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}
