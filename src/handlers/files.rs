use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    errors::Result,
    extract::{JsonBody, RecordId},
    handlers::AppState,
    models::{CreateFileRequest, FileRecord},
};

#[utoipa::path(
    post,
    path = "/files",
    request_body = CreateFileRequest,
    responses(
        (status = 201, description = "File record stored", body = FileRecord),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store failure")
    ),
    tag = "files"
)]
pub async fn create_file(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileRecord>)> {
    let record = state.records.create_file(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/files/{id}",
    params(("id" = String, Path, description = "File record identifier")),
    responses(
        (status = 200, description = "File record found", body = FileRecord),
        (status = 404, description = "No record with this identifier"),
        (status = 500, description = "Store failure")
    ),
    tag = "files"
)]
pub async fn get_file(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<FileRecord>> {
    let record = state.records.get_file(&id).await?;
    Ok(Json(record))
}
