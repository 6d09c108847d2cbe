//! Processing History

use super::ApiClient;
use crate::error::ApiError;
use crate::history::HistoryFilter;
use crate::models::HistoryTableData;

impl ApiClient {
    pub async fn history_table(&self, filter: &HistoryFilter) -> Result<HistoryTableData, ApiError> {
        self.get_json(&format!("/history_table_data{}", filter.query())).await
    }

    /// Download URL for the Excel export; fetched by the browser, not by us
    pub fn history_export_url(&self, filter: &HistoryFilter) -> String {
        self.url(&format!("/export_history_excel{}", filter.query()))
    }
}
