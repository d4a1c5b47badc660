use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response carrying the current server timestamp
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StartResponseDto {
    pub current_datetime: DateTime<Utc>,
}
