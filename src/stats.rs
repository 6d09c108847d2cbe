//! Processing Time Estimate

use crate::models::ProcessingStats;

/// Parse "<m>м <s>с" into seconds
pub fn parse_duration(text: &str) -> Option<u64> {
    let (minutes, rest) = text.trim().split_once('м')?;
    let seconds = rest.trim().strip_suffix('с')?;
    let minutes: u64 = minutes.trim().parse().ok()?;
    let seconds: u64 = seconds.trim().parse().ok()?;
    Some(minutes * 60 + seconds)
}

pub fn format_duration(total_seconds: u64) -> String {
    format!("{}м {}с", total_seconds / 60, total_seconds % 60)
}

/// Expected time to process `pending` claims at the backend's average pace
pub fn total_estimate(stats: Option<&ProcessingStats>, pending: usize) -> String {
    let per_claim = match stats {
        Some(stats) if pending > 0 => parse_duration(&stats.average_time),
        _ => None,
    };
    format_duration(per_claim.map_or(0, |secs| secs * pending as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(avg: &str) -> ProcessingStats {
        ProcessingStats { average_time: avg.to_string(), total_completed: 10 }
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("2м 30с"), Some(150));
        assert_eq!(parse_duration("0м 0с"), Some(0));
        assert_eq!(parse_duration("abc"), None);
    }

    #[test]
    fn test_total_estimate_multiplies() {
        assert_eq!(total_estimate(Some(&stats("1м 40с")), 3), "5м 0с");
    }

    #[test]
    fn test_total_estimate_zero_cases() {
        assert_eq!(total_estimate(None, 3), "0м 0с");
        assert_eq!(total_estimate(Some(&stats("1м 40с")), 0), "0м 0с");
        assert_eq!(total_estimate(Some(&stats("n/a")), 2), "0м 0с");
    }
}
