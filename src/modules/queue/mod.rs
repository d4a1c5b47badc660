//! Queue module for the analysis worker hand-off
//!
//! Publishes one notification per committed report onto a named Redis
//! list consumed by the downstream image-analysis worker.

mod notifier;

pub use notifier::{QueueNotifier, ReportNotification};

use async_trait::async_trait;

use crate::core::error::AppError;

/// Queue abstraction for the post-commit analysis hand-off.
///
/// Delivery is at-most-once: callers log a failed publish and move on, the
/// request has already succeeded by then.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    /// Push a notification onto the queue.
    async fn publish(&self, notification: &ReportNotification) -> Result<(), AppError>;
}
