//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, hello_handler,
    list_links_handler, patch_link_handler, replace_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /hello`       - Greeting
/// - `GET    /links`       - List links
/// - `POST   /links`       - Create a link
/// - `GET    /links/{id}`  - Fetch one link
/// - `PUT    /links/{id}`  - Replace a link
/// - `PATCH  /links/{id}`  - Partially update a link
/// - `DELETE /links/{id}`  - Remove a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(replace_link_handler)
                .patch(patch_link_handler)
                .delete(delete_link_handler),
        )
}
