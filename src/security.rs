//! Security Panel Helpers

use std::net::IpAddr;

use crate::error::ValidationError;

pub fn risk_label(level: &str) -> &'static str {
    match level {
        "SAFE" => "Безопасно",
        "LOW" => "Низкий",
        "MEDIUM" => "Средний",
        "HIGH" => "Высокий",
        "CRITICAL" => "Критический",
        _ => "Неизвестно",
    }
}

pub fn risk_class(level: &str) -> &'static str {
    match level {
        "SAFE" | "LOW" => "safe",
        "MEDIUM" | "HIGH" => "warning",
        "CRITICAL" => "danger",
        _ => "",
    }
}

/// Trim and check the address before it goes into a URL path
pub fn validate_ip(input: &str) -> Result<String, ValidationError> {
    let ip = input.trim();
    ip.parse::<IpAddr>()
        .map(|_| ip.to_string())
        .map_err(|_| ValidationError::InvalidIp)
}

/// Re-indent the exported JSON string; returns it unchanged if it is not JSON
pub fn pretty_export(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_mapping() {
        assert_eq!(risk_label("CRITICAL"), "Критический");
        assert_eq!(risk_class("CRITICAL"), "danger");
        assert_eq!(risk_label("???"), "Неизвестно");
        assert_eq!(risk_class("LOW"), "safe");
    }

    #[test]
    fn test_validate_ip() {
        assert_eq!(validate_ip(" 192.168.0.1 "), Ok("192.168.0.1".to_string()));
        assert_eq!(validate_ip("::1"), Ok("::1".to_string()));
        assert_eq!(validate_ip("192.168.0.1/../x"), Err(ValidationError::InvalidIp));
        assert_eq!(validate_ip(""), Err(ValidationError::InvalidIp));
    }

    #[test]
    fn test_pretty_export() {
        assert_eq!(pretty_export(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_export("oops"), "oops");
    }
}
