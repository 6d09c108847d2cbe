//! Working-hours Schedule

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ScheduleSettings, ScheduleStatus};

impl ApiClient {
    pub async fn get_schedule_settings(&self) -> Result<ScheduleSettings, ApiError> {
        self.get_json("/api/schedule/settings").await
    }

    /// Saves and returns the settings as stored by the backend
    pub async fn save_schedule_settings(&self, settings: &ScheduleSettings) -> Result<ScheduleSettings, ApiError> {
        self.post_json("/api/schedule/settings", settings).await
    }

    pub async fn get_schedule_status(&self) -> Result<ScheduleStatus, ApiError> {
        self.get_json("/api/schedule/status").await
    }
}
