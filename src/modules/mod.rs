//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for object storage and the analysis queue.

pub mod queue;
pub mod storage;
