//! Handlers for the useful-links CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::link::{LinkRequest, LinkResponse, PatchLinkRequest};
use crate::config::NotFoundMode;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a lookup result according to the configured [`NotFoundMode`].
fn found_or_missing(state: &AppState, id: i64, link: Option<Link>) -> Result<Response, AppError> {
    match (link, state.not_found_mode) {
        (Some(link), _) => Ok(Json(LinkResponse::from(link)).into_response()),
        (None, NotFoundMode::Empty) => Ok(StatusCode::OK.into_response()),
        (None, NotFoundMode::Status) => Err(AppError::not_found(
            "Link not found",
            json!({ "id": id }),
        )),
    }
}

/// Lists every link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// [
///   { "id": "1", "titulo": "GitHub", "url": "https://github.com" },
///   { "id": "2", "titulo": "Stack Overflow", "url": "https://stackoverflow.com" }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;
    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer. A missing link is
/// answered per [`NotFoundMode`].
pub async fn get_link_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let link = state.link_service.get_link(id).await?;
    found_or_missing(&state, id, link)
}

/// Creates a link under the next free id.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "titulo": "Google", "url": "https://google.com" }
/// ```
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;
    let link = state.link_service.create_link(payload.into()).await?;
    Ok(Json(link.into()))
}

/// Replaces the link at `id`, creating it if absent.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
pub async fn replace_link_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let link = state.link_service.replace_link(id, payload.into()).await?;
    Ok(Json(link.into()))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}`
///
/// # Request Body
///
/// All fields are optional. Absent fields are left unchanged, `null` clears.
///
/// ```json
/// { "titulo": "Só o Título Novo" }
/// ```
pub async fn patch_link_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PatchLinkRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let link = state.link_service.patch_link(id, payload.into()).await?;
    found_or_missing(&state, id, link)
}

/// Removes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Always answers `Link {id} removido`, whether or not the link existed.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<String, AppError> {
    let Path(id) = id?;
    state.link_service.delete_link(id).await
}
