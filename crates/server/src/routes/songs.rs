use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::song;
use service::errors::LibraryError;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SongInput {
    pub squad: String,
    pub song: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AddResponse {
    pub id: i64,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct LibraryQuery {
    /// Records per page.
    #[serde(default)]
    pub pagination: i64,
    /// `ASC` or `DESC`.
    #[serde(default)]
    pub order: String,
    /// One of `song`, `text`, `squad`, `id`.
    #[serde(default)]
    pub field: String,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::from(LibraryError::InvalidId))
}

#[utoipa::path(
    post, path = "/add", tag = "songs",
    request_body = SongInput,
    responses(
        (status = 200, description = "Created", body = AddResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    Json(input): Json<SongInput>,
) -> Result<Json<AddResponse>, ApiError> {
    let id = state.library.add(&input.squad, &input.song, &input.text).await?;
    info!(id, "created song");
    Ok(Json(AddResponse { id }))
}

#[utoipa::path(
    patch, path = "/update/{id}", tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    request_body = SongInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Song not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<SongInput>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.library.update(id, &input.squad, &input.song, &input.text).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/text/{id}", tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 200, description = "Text as ordered lines"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Song not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn text(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let id = parse_id(&id)?;
    let lines = state.library.text(id).await?;
    Ok(Json(lines))
}

#[utoipa::path(
    delete, path = "/delete/{id}", tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Song not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.library.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/all", tag = "songs",
    params(LibraryQuery),
    responses(
        (status = 200, description = "Pages of songs"),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn library(
    State(state): State<ServerState>,
    Query(q): Query<LibraryQuery>,
) -> Result<Json<Vec<Vec<song::Model>>>, ApiError> {
    let pages = state.library.library(&q.order, &q.field, q.pagination).await?;
    info!(pages = pages.len(), "listed library");
    Ok(Json(pages))
}
