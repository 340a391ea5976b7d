/// Liveness probe. Never touches the store.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is alive", body = String)),
    tag = "health"
)]
pub async fn health_check() -> &'static str {
    "OK"
}
