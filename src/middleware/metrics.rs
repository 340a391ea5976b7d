use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::services::metrics::{record_response, RequestTimer};

pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    // Route template keeps label cardinality bounded (`/files/:id`, not each id).
    let route = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => request.uri().path().to_string(),
    };

    let _timer = RequestTimer::new(method.clone(), route.clone());

    let response = next.run(request).await;

    record_response(&method, &route, response.status());

    response
}
