use axum::{extract::State, http::StatusCode, Json};

use crate::{
    errors::Result,
    extract::JsonBody,
    handlers::AppState,
    models::{CreateUserRequest, User},
};

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User echoed with a generated id", body = User),
        (status = 400, description = "Malformed request body")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.records.create_user(request);
    Ok((StatusCode::CREATED, Json(user)))
}
