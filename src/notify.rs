//! Notifications
//!
//! Toast messages that expire on a timer, plus the blocking error modal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification-success",
            ToastKind::Error => "notification notification-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Only the newest toast stays on screen
pub fn replace_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.clear();
    toasts.push(toast);
}

pub fn dismiss_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|t| t.id != id);
}

/// Keep only the timer of the toast just shown; older toasts were replaced
pub fn track_timer<T>(timers: &mut Vec<(u64, T)>, id: u64, timer: T) {
    timers.clear();
    timers.push((id, timer));
}

pub fn untrack_timer<T>(timers: &mut Vec<(u64, T)>, id: u64) {
    timers.retain(|(timer_id, _)| *timer_id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, kind: ToastKind::Success, message: format!("m{}", id) }
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let mut toasts = vec![toast(1)];
        replace_toast(&mut toasts, toast(2));
        assert_eq!(toasts, vec![toast(2)]);
    }

    #[test]
    fn test_dismiss_only_matching_id() {
        let mut toasts = vec![toast(2)];
        // An expiry timer for an already replaced toast must not remove the new one
        dismiss_toast(&mut toasts, 1);
        assert_eq!(toasts.len(), 1);
        dismiss_toast(&mut toasts, 2);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_replaced_toast_timer_is_dropped() {
        let mut timers = vec![(1, "first")];
        track_timer(&mut timers, 2, "second");
        assert_eq!(timers, vec![(2, "second")]);

        untrack_timer(&mut timers, 3);
        assert_eq!(timers.len(), 1);
        untrack_timer(&mut timers, 2);
        assert!(timers.is_empty());
    }
}
