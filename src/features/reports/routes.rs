use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::reports::handlers::upload_report;
use crate::features::reports::services::ReportService;

const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>) -> Router {
    routes_with_limit(report_service, DEFAULT_UPLOAD_LIMIT)
}

/// Routes with an explicit upload size limit (config-driven from main)
pub fn routes_with_limit(report_service: Arc<ReportService>, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/upload/",
            // Allow body size up to the limit plus buffer for multipart overhead
            post(upload_report).layer(DefaultBodyLimit::max(max_upload_size + 1024 * 1024)),
        )
        .with_state(report_service)
}
