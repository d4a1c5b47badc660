use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a hazard report
///
/// Carries the full row as committed; request handling only forwards a
/// subset, the rest is kept for read paths and the analysis consumer.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Report {
    pub id: Uuid,
    pub name: String,
    /// Raw location string as submitted; expected to be a JSON object with
    /// latitude/longitude but stored opaque
    pub location: String,
    pub username: String,
    pub hazard_type: String,
    pub description: String,
    /// Object-storage key of the uploaded image
    pub file_key: String,
    pub created_at: DateTime<Utc>,
}
