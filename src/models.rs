//! Frontend Models
//!
//! Data structures matching backend JSON responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder shown (and compared) for a claim field the user left empty
pub const NOT_SET: &str = "Не задано";

/// A claim waiting in the pending list (not yet sent to the backend)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClaim {
    pub id: u64,
    pub claim_number: String,
    pub vin_number: String,
}

impl PendingClaim {
    /// Claim number as the backend expects it (sentinel sent as empty)
    pub fn claim_for_wire(&self) -> &str {
        if self.claim_number == NOT_SET { "" } else { &self.claim_number }
    }

    pub fn vin_for_wire(&self) -> &str {
        if self.vin_number == NOT_SET { "" } else { &self.vin_number }
    }
}

/// Login form credentials shared by every claim in a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub svg_collection: bool,
}

// ========================
// Processing stats
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Formatted as "<m>м <s>с"
    #[serde(default = "zero_time")]
    pub average_time: String,
    #[serde(default)]
    pub total_completed: u64,
}

fn zero_time() -> String {
    "0м 0с".to_string()
}

// ========================
// Schedule
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleState {
    Active,
    Waiting,
    #[serde(other)]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatus {
    pub status: ScheduleState,
    #[serde(default)]
    pub time_to_start_minutes: Option<u32>,
    #[serde(default)]
    pub settings: Option<ScheduleSettings>,
}

// ========================
// Intake (/login, /terminate)
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub is_working_hours: Option<bool>,
    #[serde(default)]
    pub time_to_start_minutes: Option<u32>,
    #[serde(default)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminateResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ========================
// Queue
// ========================

/// Envelope used by every `/api/queue/*` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueStats {
    pub is_running: bool,
    pub queue_length: u64,
    pub processing_count: u64,
    pub processed_count: u64,
    pub failed_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueRequests {
    pub pending_requests: Vec<QueuedRequest>,
    pub processing_requests: Vec<QueuedRequest>,
    pub completed_requests: Vec<QueuedRequest>,
    pub pending_count: u64,
    pub processing_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueuedRequest {
    pub claim_number: Option<String>,
    pub vin_number: Option<String>,
    pub added_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub svg_collection: bool,
    pub success: Option<bool>,
}

// ========================
// History
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayBucket {
    pub count: u64,
    pub claims: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOutcome {
    pub success: Option<DayBucket>,
    pub error: Option<DayBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryTableData {
    pub table_data: BTreeMap<String, DayOutcome>,
    pub date_range: Vec<String>,
    pub error: Option<String>,
}

// ========================
// Security
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityStatistics {
    pub blocked_ips_count: u64,
    pub total_events: u64,
    pub blocked_ips: u64,
    pub high_risk_events: u64,
    pub critical_events: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    pub statistics: SecurityStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityStatus {
    pub overall_risk_level: Option<String>,
    pub rate_limiting: SecuritySection,
    pub ddos_protection: SecuritySection,
    pub security_monitoring: SecuritySection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityAlert {
    pub level: String,
    pub timestamp: String,
    pub message: String,
    pub ip: String,
    pub events_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertList {
    pub alerts: Vec<SecurityAlert>,
}

/// Reply of ban/unban and the utility endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    pub message: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityExport {
    pub export_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_status_parses_unknown_as_inactive() {
        let status: ScheduleStatus = serde_json::from_str(
            r#"{"status":"disabled","time_to_start_minutes":null}"#,
        ).unwrap();
        assert_eq!(status.status, ScheduleState::Inactive);
        assert!(status.settings.is_none());
    }

    #[test]
    fn test_login_response_minimal() {
        let resp: LoginResponse = serde_json::from_str(r#"{"success":false,"error":"bad"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("bad"));
        assert_eq!(resp.is_working_hours, None);
    }

    #[test]
    fn test_wire_fields_drop_sentinel() {
        let claim = PendingClaim { id: 1, claim_number: NOT_SET.into(), vin_number: "VIN1".into() };
        assert_eq!(claim.claim_for_wire(), "");
        assert_eq!(claim.vin_for_wire(), "VIN1");
    }
}
