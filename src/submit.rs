//! Batch Submission
//!
//! Sends every pending claim to the intake endpoint, one at a time and in
//! list order. The first rejected claim stops the batch.

use leptos::logging::{log, warn};

use crate::error::{ApiError, BatchError, ValidationError};
use crate::models::{Credentials, LoginResponse, PendingClaim, ScheduleState, ScheduleStatus};
use crate::pending::PendingList;
use crate::schedule::format_wait;

/// Backend seam used by the submitter
pub trait IntakeBackend {
    /// Submit one claim; `Ok` carries the backend's verdict
    async fn submit_claim(&self, credentials: &Credentials, claim: &PendingClaim) -> Result<LoginResponse, ApiError>;

    async fn schedule_status(&self) -> Result<ScheduleStatus, ApiError>;

    /// Wait between two submissions
    async fn pause(&self, ms: u32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub submitted: usize,
    /// Minutes until the backend starts working, when outside working hours
    pub wait_minutes: Option<u32>,
}

impl BatchReport {
    pub fn message(&self) -> String {
        match self.wait_minutes {
            Some(wait) => format!(
                "Все {} заявок добавлены в очередь. Обработка начнется через {}",
                self.submitted,
                format_wait(wait)
            ),
            None => format!("Все {} заявок добавлены в очередь и начали обрабатываться", self.submitted),
        }
    }
}

pub fn progress_label(current: usize, total: usize) -> String {
    format!("Отправка заявки {} из {}...", current, total)
}

/// Submit `claims` in order. `on_progress(i, n)` fires (1-based) before each send.
pub async fn submit_batch<B: IntakeBackend>(
    backend: &B,
    claims: &[PendingClaim],
    credentials: &Credentials,
    delay_ms: u32,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<BatchReport, BatchError> {
    if claims.is_empty() {
        return Err(ValidationError::EmptyQueue.into());
    }

    let total = claims.len();
    let mut gated_wait = None;

    for (i, claim) in claims.iter().enumerate() {
        on_progress(i + 1, total);
        log!("[SUBMIT] Sending claim {}/{} (id={})", i + 1, total, claim.id);

        let reply = backend.submit_claim(credentials, claim).await?;
        if !reply.success {
            let reason = reply.error.unwrap_or_else(|| "неизвестная ошибка".to_string());
            warn!("[SUBMIT] Claim {} rejected: {}", i + 1, reason);
            return Err(BatchError::Rejected { index: i + 1, reason });
        }
        if reply.is_working_hours == Some(false) {
            gated_wait = reply.time_to_start_minutes.or(gated_wait);
        }

        if i + 1 < total {
            backend.pause(delay_ms).await;
        }
    }

    let wait_minutes = match gated_wait {
        Some(wait) => Some(wait),
        None => match backend.schedule_status().await {
            Ok(status) if status.status == ScheduleState::Waiting => status.time_to_start_minutes,
            Ok(_) => None,
            Err(e) => {
                warn!("[SUBMIT] Schedule status unavailable after batch: {}", e);
                None
            }
        },
    };

    log!("[SUBMIT] Batch of {} accepted", total);
    Ok(BatchReport { submitted: total, wait_minutes })
}

/// Apply a finished batch to the list: only full success drains it
pub fn settle(list: &mut PendingList, result: &Result<BatchReport, BatchError>) {
    if result.is_ok() {
        list.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleSettings;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct ScriptedBackend {
        replies: RefCell<Vec<Result<LoginResponse, ApiError>>>,
        schedule: Result<ScheduleStatus, ApiError>,
        sent: RefCell<Vec<String>>,
        pauses: RefCell<Vec<u32>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<LoginResponse, ApiError>>, schedule: Result<ScheduleStatus, ApiError>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().rev().collect()),
                schedule,
                sent: RefCell::new(Vec::new()),
                pauses: RefCell::new(Vec::new()),
            }
        }
    }

    impl IntakeBackend for ScriptedBackend {
        async fn submit_claim(&self, _credentials: &Credentials, claim: &PendingClaim) -> Result<LoginResponse, ApiError> {
            self.sent.borrow_mut().push(claim.claim_number.clone());
            self.replies.borrow_mut().pop().expect("unexpected submission")
        }

        async fn schedule_status(&self) -> Result<ScheduleStatus, ApiError> {
            self.schedule.clone()
        }

        async fn pause(&self, ms: u32) {
            self.pauses.borrow_mut().push(ms);
        }
    }

    fn accepted() -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse { success: true, ..Default::default() })
    }

    fn rejected(reason: &str) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse { success: false, error: Some(reason.to_string()), ..Default::default() })
    }

    fn active() -> Result<ScheduleStatus, ApiError> {
        Ok(ScheduleStatus { status: ScheduleState::Active, time_to_start_minutes: None, settings: None })
    }

    fn list_of(claims: &[&str]) -> PendingList {
        let mut list = PendingList::new();
        for (i, claim) in claims.iter().enumerate() {
            list.add(claim, "", i as u64 + 1).unwrap();
        }
        list
    }

    #[test]
    fn test_empty_list_makes_no_calls() {
        let backend = ScriptedBackend::new(vec![], active());
        let result = block_on(submit_batch(&backend, &[], &Credentials::default(), 100, |_, _| {}));
        assert_eq!(result, Err(BatchError::Validation(ValidationError::EmptyQueue)));
        assert!(backend.sent.borrow().is_empty());
    }

    #[test]
    fn test_rejection_halts_and_keeps_list() {
        let mut list = list_of(&["A", "B", "C"]);
        let backend = ScriptedBackend::new(vec![accepted(), accepted(), rejected("нет доступа")], active());
        let mut progress = Vec::new();

        let result = block_on(submit_batch(&backend, list.entries(), &Credentials::default(), 100, |i, n| progress.push((i, n))));
        settle(&mut list, &result);

        assert_eq!(*backend.sent.borrow(), vec!["A", "B", "C"]);
        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
        let err = result.unwrap_err();
        assert_eq!(err, BatchError::Rejected { index: 3, reason: "нет доступа".into() });
        assert!(err.to_string().contains("заявки 3"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_stops_at_first_rejection() {
        let backend = ScriptedBackend::new(vec![accepted(), rejected("x")], active());
        let list = list_of(&["A", "B", "C"]);
        let result = block_on(submit_batch(&backend, list.entries(), &Credentials::default(), 100, |_, _| {}));
        assert!(matches!(result, Err(BatchError::Rejected { index: 2, .. })));
        assert_eq!(backend.sent.borrow().len(), 2);
    }

    #[test]
    fn test_full_success_reports_schedule_wait_and_clears() {
        let mut list = list_of(&["A", "B"]);
        let waiting = Ok(ScheduleStatus {
            status: ScheduleState::Waiting,
            time_to_start_minutes: Some(125),
            settings: Some(ScheduleSettings { start_time: "09:00".into(), end_time: "18:00".into() }),
        });
        let backend = ScriptedBackend::new(vec![accepted(), accepted()], waiting);

        let result = block_on(submit_batch(&backend, list.entries(), &Credentials::default(), 100, |_, _| {}));
        settle(&mut list, &result);

        let report = result.unwrap();
        assert_eq!(report.submitted, 2);
        assert!(report.message().contains("2ч 5м"));
        assert!(list.is_empty());
        // One pause between two items, none after the last
        assert_eq!(*backend.pauses.borrow(), vec![100]);
    }

    #[test]
    fn test_login_reply_gating_wins_over_status_query() {
        let gated = Ok(LoginResponse {
            success: true,
            is_working_hours: Some(false),
            time_to_start_minutes: Some(61),
            ..Default::default()
        });
        let backend = ScriptedBackend::new(vec![gated], Err(ApiError::Status(500)));
        let list = list_of(&["A"]);
        let report = block_on(submit_batch(&backend, list.entries(), &Credentials::default(), 100, |_, _| {})).unwrap();
        assert_eq!(report.wait_minutes, Some(61));
        assert!(backend.pauses.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure_aborts() {
        let mut list = list_of(&["A", "B"]);
        let backend = ScriptedBackend::new(vec![accepted(), Err(ApiError::Decode("eof".into()))], active());
        let result = block_on(submit_batch(&backend, list.entries(), &Credentials::default(), 100, |_, _| {}));
        settle(&mut list, &result);
        assert!(matches!(result, Err(BatchError::Transport(_))));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_plain_success_message() {
        let report = BatchReport { submitted: 4, wait_minutes: None };
        assert_eq!(report.message(), "Все 4 заявок добавлены в очередь и начали обрабатываться");
    }
}
