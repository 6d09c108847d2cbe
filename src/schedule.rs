//! Work Schedule Arithmetic
//!
//! All times are minutes since midnight (0..1440).

use crate::models::{ScheduleState, ScheduleStatus};

pub const MINUTES_PER_DAY: u32 = 1440;

/// Is `current` inside [start, end]? A range with start > end wraps midnight.
pub fn is_time_in_range(current: u32, start: u32, end: u32) -> bool {
    if start <= end {
        current >= start && current <= end
    } else {
        current >= start || current <= end
    }
}

/// Forward distance in minutes from `current` to `target`, wrapping at midnight
fn forward_distance(current: u32, target: u32) -> u32 {
    let diff = target as i64 - current as i64;
    if diff < 0 {
        (diff + MINUTES_PER_DAY as i64) as u32
    } else {
        diff as u32
    }
}

pub fn time_to_start(current: u32, start: u32) -> u32 {
    forward_distance(current, start)
}

pub fn time_to_end(current: u32, end: u32) -> u32 {
    forward_distance(current, end)
}

/// "HH:MM" -> minutes since midnight
pub fn parse_hhmm(text: &str) -> Option<u32> {
    let (h, m) = text.trim().split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    (h < 24 && m < 60).then_some(h * 60 + m)
}

pub fn format_hhmm(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// 125 -> "2ч 5м"
pub fn format_wait(minutes: u32) -> String {
    format!("{}ч {}м", minutes / 60, minutes % 60)
}

/// Status line for the backend-reported schedule state
pub fn status_label(status: &ScheduleStatus) -> (String, &'static str) {
    let range = status
        .settings
        .as_ref()
        .map(|s| format!("{}-{}", s.start_time, s.end_time))
        .unwrap_or_else(|| "—".to_string());

    match status.status {
        ScheduleState::Active => (format!("Активен ({})", range), "status-value running"),
        ScheduleState::Waiting => {
            let wait = format_wait(status.time_to_start_minutes.unwrap_or(0));
            (format!("Ожидание ({}, через {})", range, wait), "status-value waiting")
        }
        ScheduleState::Inactive => ("Не настроено".to_string(), "status-value stopped"),
    }
}

/// Local "right now" line, computed without asking the backend
pub fn local_window_label(current: u32, start: u32, end: u32) -> String {
    if is_time_in_range(current, start, end) {
        format!("Рабочее время, до конца {}", format_wait(time_to_end(current, end)))
    } else {
        format!("Вне рабочего времени, до начала {}", format_wait(time_to_start(current, start)))
    }
}

/// Current local minute of day from the browser clock
pub fn current_minute_of_day() -> u32 {
    let now = js_sys::Date::new_0();
    now.get_hours() * 60 + now.get_minutes()
}
