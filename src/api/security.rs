//! Security Monitoring

use super::{encode_component, query_string, ApiClient};
use crate::error::ApiError;
use crate::models::{ActionResponse, AlertList, SecurityExport, SecurityStatus};

/// Maintenance endpoints exposed by the security backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityUtility {
    ClearEvents,
    ClearAlerts,
}

impl SecurityUtility {
    fn path(&self) -> &'static str {
        match self {
            SecurityUtility::ClearEvents => "/security/clear-events",
            SecurityUtility::ClearAlerts => "/security/clear-alerts",
        }
    }
}

impl ApiClient {
    pub async fn security_status(&self) -> Result<SecurityStatus, ApiError> {
        self.get_json("/security/status").await
    }

    pub async fn security_alerts(&self, limit: u32) -> Result<AlertList, ApiError> {
        let limit = limit.to_string();
        self.get_json(&format!("/security/alerts{}", query_string(&[("limit", limit.as_str())]))).await
    }

    pub async fn ban_ip(&self, ip: &str, duration_secs: u32) -> Result<ActionResponse, ApiError> {
        let duration = duration_secs.to_string();
        let path = format!(
            "/security/ban/{}{}",
            encode_component(ip),
            query_string(&[("duration", duration.as_str())])
        );
        self.post_empty(&path).await
    }

    pub async fn unban_ip(&self, ip: &str) -> Result<ActionResponse, ApiError> {
        self.post_empty(&format!("/security/unban/{}", encode_component(ip))).await
    }

    pub async fn security_export(&self) -> Result<SecurityExport, ApiError> {
        self.get_json("/security/export?format_type=json").await
    }

    pub async fn security_utility(&self, utility: SecurityUtility) -> Result<ActionResponse, ApiError> {
        self.post_empty(utility.path()).await
    }
}
