use axum::{http::header, response::IntoResponse};

use crate::services::metrics::encode_metrics;

pub async fn metrics_handler() -> impl IntoResponse {
    let (status, body) = encode_metrics();
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
