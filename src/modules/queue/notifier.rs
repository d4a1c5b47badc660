use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::config::QueueConfig;
use crate::core::error::AppError;

use super::NotificationQueue;

/// Payload pushed for every committed report.
///
/// The consumer receives the row id plus a ready-to-fetch image URL so it
/// never has to know the storage layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportNotification {
    pub report_id: Uuid,
    pub image_url: String,
}

/// Redis-backed publisher for the analysis queue.
pub struct QueueNotifier {
    client: redis::Client,
    queue_name: String,
    connect_max_attempts: u32,
    connect_retry_delay_secs: u64,
}

impl QueueNotifier {
    pub fn new(config: QueueConfig) -> Result<Self, AppError> {
        let client = redis::Client::open(config.url()).map_err(|e| {
            AppError::Notification(format!("Failed to create queue client: {}", e))
        })?;

        Ok(Self {
            client,
            queue_name: config.queue_name,
            connect_max_attempts: config.connect_max_attempts,
            connect_retry_delay_secs: config.connect_retry_delay_secs,
        })
    }

    /// Verify broker connectivity at startup, retrying transient failures
    /// with a growing delay instead of failing the whole process on the
    /// first refused connection.
    pub async fn connect_with_retry(&self) -> Result<(), AppError> {
        let mut last_error = String::new();

        for attempt in 1..=self.connect_max_attempts {
            match self.ping().await {
                Ok(()) => {
                    info!(
                        "Queue connection established (queue: {}, attempt: {})",
                        self.queue_name, attempt
                    );
                    return Ok(());
                }
                Err(e) => {
                    last_error = e.to_string();
                    let delay = self.connect_retry_delay_secs * attempt as u64;
                    warn!(
                        "Queue connection attempt {}/{} failed: {}. Retrying in {}s",
                        attempt, self.connect_max_attempts, last_error, delay
                    );
                    if attempt < self.connect_max_attempts {
                        tokio::time::sleep(Duration::from_secs(delay)).await;
                    }
                }
            }
        }

        Err(AppError::Notification(format!(
            "Queue unreachable after {} attempts: {}",
            self.connect_max_attempts, last_error
        )))
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Notification(format!("Failed to connect to queue: {}", e)))?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::Notification(format!("Queue ping failed: {}", e)))?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(AppError::Notification(format!(
                "Unexpected ping reply: {}",
                pong
            )))
        }
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }
}

#[async_trait]
impl NotificationQueue for QueueNotifier {
    async fn publish(&self, notification: &ReportNotification) -> Result<(), AppError> {
        let payload = serde_json::to_string(notification).map_err(|e| {
            AppError::Notification(format!("Failed to serialize notification: {}", e))
        })?;

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Notification(format!("Failed to connect to queue: {}", e)))?;

        let _: () = conn.lpush(&self.queue_name, payload).await.map_err(|e| {
            AppError::Notification(format!(
                "Failed to publish to queue '{}': {}",
                self.queue_name, e
            ))
        })?;

        info!(
            "Published notification for report {} to queue '{}'",
            notification.report_id, self.queue_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_shape() {
        let notification = ReportNotification {
            report_id: Uuid::parse_str("7f1c6a70-2b5e-4e37-9d24-40a1f0b6c001").unwrap(),
            image_url: "https://images.example.com/hazard-reports/reports/abc.png".to_string(),
        };

        let payload = serde_json::to_string(&notification).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(
            value["report_id"],
            "7f1c6a70-2b5e-4e37-9d24-40a1f0b6c001"
        );
        assert_eq!(
            value["image_url"],
            "https://images.example.com/hazard-reports/reports/abc.png"
        );
    }

    #[test]
    fn test_notification_round_trip() {
        let notification = ReportNotification {
            report_id: Uuid::new_v4(),
            image_url: "https://images.example.com/hazard-reports/reports/x.jpg".to_string(),
        };

        let payload = serde_json::to_string(&notification).unwrap();
        let decoded: ReportNotification = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, notification);
    }
}
