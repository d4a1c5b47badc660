use axum::Json;
use chrono::Utc;

use crate::features::health::dtos::StartResponseDto;

/// Liveness check
///
/// Returns the current server timestamp. No state, no side effects; used by
/// deployment orchestration.
#[utoipa::path(
    get,
    path = "/start/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = StartResponseDto)
    )
)]
pub async fn start() -> Json<StartResponseDto> {
    Json(StartResponseDto {
        current_datetime: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::features::health::routes;

    #[tokio::test]
    async fn test_start_returns_current_datetime() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.get("/start/").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: serde_json::Value = response.json();
        assert!(body["current_datetime"].is_string());
    }
}
