pub mod config;
pub mod database;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;

pub use handlers::{create_app, AppState};
