//! Backend Queue Control

use serde_json::Value;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{QueueRequests, QueueResponse, QueueStats};

impl ApiClient {
    pub async fn queue_status(&self) -> Result<QueueResponse<QueueStats>, ApiError> {
        self.get_json("/api/queue/status").await
    }

    pub async fn queue_requests(&self) -> Result<QueueResponse<QueueRequests>, ApiError> {
        self.get_json("/api/queue/requests").await
    }

    pub async fn queue_start(&self) -> Result<QueueResponse<Value>, ApiError> {
        self.post_empty("/api/queue/start").await
    }

    pub async fn queue_stop(&self) -> Result<QueueResponse<Value>, ApiError> {
        self.post_empty("/api/queue/stop").await
    }

    pub async fn queue_clear(&self) -> Result<QueueResponse<Value>, ApiError> {
        self.delete_json("/api/queue/clear").await
    }
}
