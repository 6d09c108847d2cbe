use super::ApiClient;
use crate::error::ApiError;
use crate::models::ProcessingStats;

impl ApiClient {
    pub async fn processing_stats(&self) -> Result<ProcessingStats, ApiError> {
        self.get_json("/api/processing-stats").await
    }
}
