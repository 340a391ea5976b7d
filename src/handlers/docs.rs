use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::files::create_file,
        crate::handlers::files::get_file,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::User,
            crate::models::CreateFileRequest,
            crate::models::FileRecord,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "users", description = "Transient user echo endpoint"),
        (name = "files", description = "File metadata records")
    ),
    info(
        title = "File Record Service",
        version = "0.1.0",
        description = "File metadata records backed by SQLite"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
