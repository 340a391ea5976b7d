use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{database::Database, middleware::metrics_middleware, services::RecordService};

pub mod docs;
pub mod files;
pub mod health;
pub mod metrics;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self {
            records: RecordService::new(database),
        }
    }
}

pub fn create_app(database: Database) -> Router {
    let state = AppState::new(database);

    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/users", post(users::create_user))
        .route("/files", post(files::create_file))
        .route("/files/:id", get(files::get_file))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
