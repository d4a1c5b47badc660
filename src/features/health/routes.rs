use axum::{routing::get, Router};

use crate::features::health::handlers;

/// Create routes for the health feature
pub fn routes() -> Router {
    Router::new().route("/start/", get(handlers::start))
}
