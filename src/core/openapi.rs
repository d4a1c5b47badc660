use utoipa::OpenApi;

use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::upload_report,
        // Health
        health_handlers::start,
    ),
    components(
        schemas(
            // Reports
            reports_dtos::UploadReportDto,
            reports_dtos::UploadReportResponseDto,
            ApiResponse<reports_dtos::UploadReportResponseDto>,
            // Health
            health_dtos::StartResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Hazard report submission"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "Hazard Report API",
        version = "0.1.0",
        description = "File-upload ingestion endpoint for the hazard-reporting mobile app",
    )
)]
pub struct ApiDoc;
