//! Pending List Controller
//!
//! Owns the pending claims of one mounted request view. Every mutation goes
//! through here so that nothing changes the list while a batch is in flight.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_dragdrop::Reorder;

use crate::error::{BatchError, ValidationError};
use crate::models::Credentials;
use crate::pending::{project_rows, PendingList, RequestRow};
use crate::submit::{settle, submit_batch, BatchReport, IntakeBackend};

#[derive(Clone, Copy)]
pub struct PendingController {
    list: RwSignal<PendingList>,
    submitting: RwSignal<bool>,
    /// "Отправка заявки i из n..." while a batch runs
    progress: RwSignal<Option<String>>,
}

impl PendingController {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(PendingList::new()),
            submitting: RwSignal::new(false),
            progress: RwSignal::new(None),
        }
    }

    pub fn rows(&self) -> Vec<RequestRow> {
        self.list.with(|l| project_rows(l.entries()))
    }

    pub fn len(&self) -> usize {
        self.list.with(|l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.list.with(|l| l.is_empty())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn progress(&self) -> Option<String> {
        self.progress.get()
    }

    /// Locks drag-and-drop while submitting
    pub fn lock_signal(&self) -> Signal<bool> {
        let submitting = self.submitting;
        Signal::derive(move || submitting.get())
    }

    fn ensure_idle(&self) -> Result<(), ValidationError> {
        if self.submitting.get_untracked() {
            Err(ValidationError::SubmissionInProgress)
        } else {
            Ok(())
        }
    }

    pub fn add(&self, claim: &str, vin: &str) -> Result<(), ValidationError> {
        self.add_at(claim, vin, js_sys::Date::now() as u64)
    }

    pub fn add_at(&self, claim: &str, vin: &str, now_ms: u64) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        let mut result = Ok(());
        self.list.update(|l| {
            result = l.add(claim, vin, now_ms).map(|added| {
                log!("[QUEUE] Added claim id={} ({} / {})", added.id, added.claim_number, added.vin_number);
            });
        });
        result
    }

    pub fn remove(&self, id: u64) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        self.list.update(|l| {
            l.remove(id);
        });
        Ok(())
    }

    pub fn reorder(&self, reorder: Reorder) -> Result<(), ValidationError> {
        self.ensure_idle()?;
        log!("[DND] Move {} -> {}", reorder.from, reorder.to);
        self.list.update(|l| {
            l.move_to(reorder.from, reorder.to);
        });
        Ok(())
    }

    /// Submit every pending claim; the list is drained only on full success
    pub async fn submit<B: IntakeBackend>(
        &self,
        backend: &B,
        credentials: &Credentials,
        delay_ms: u32,
    ) -> Result<BatchReport, BatchError> {
        self.ensure_idle()?;
        let snapshot = self.list.with_untracked(|l| l.entries().to_vec());
        if snapshot.is_empty() {
            return Err(ValidationError::EmptyQueue.into());
        }

        self.submitting.set(true);
        let progress = self.progress;
        let result = submit_batch(backend, &snapshot, credentials, delay_ms, |i, n| {
            progress.set(Some(crate::submit::progress_label(i, n)));
        })
        .await;

        self.list.update(|l| settle(l, &result));
        self.submitting.set(false);
        self.progress.set(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{LoginResponse, PendingClaim, ScheduleState, ScheduleStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Accepts everything and tries to edit the list mid-batch
    struct MeddlingBackend {
        controller: PendingController,
        attempts: RefCell<Vec<Result<(), ValidationError>>>,
    }

    impl IntakeBackend for MeddlingBackend {
        async fn submit_claim(&self, _c: &Credentials, _claim: &PendingClaim) -> Result<LoginResponse, ApiError> {
            self.attempts.borrow_mut().push(self.controller.add_at("NEW", "", 99));
            Ok(LoginResponse { success: true, ..Default::default() })
        }

        async fn schedule_status(&self) -> Result<ScheduleStatus, ApiError> {
            Ok(ScheduleStatus { status: ScheduleState::Active, time_to_start_minutes: None, settings: None })
        }

        async fn pause(&self, _ms: u32) {}
    }

    #[test]
    fn test_list_is_locked_during_submission() {
        let controller = PendingController::new();
        controller.add_at("A", "", 1).unwrap();
        controller.add_at("B", "", 2).unwrap();
        let backend = MeddlingBackend { controller, attempts: RefCell::new(Vec::new()) };

        let report = block_on(controller.submit(&backend, &Credentials::default(), 0)).unwrap();

        assert_eq!(report.submitted, 2);
        assert!(backend.attempts.borrow().iter().all(|r| *r == Err(ValidationError::SubmissionInProgress)));
        assert_eq!(controller.len(), 0);
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_empty_submit_is_validation_error() {
        let controller = PendingController::new();
        let backend = MeddlingBackend { controller, attempts: RefCell::new(Vec::new()) };
        let result = block_on(controller.submit(&backend, &Credentials::default(), 0));
        assert_eq!(result, Err(BatchError::Validation(ValidationError::EmptyQueue)));
        assert!(backend.attempts.borrow().is_empty());
    }

    #[test]
    fn test_is_empty_tracks_adds_and_removes() {
        let controller = PendingController::new();
        assert!(controller.is_empty());
        controller.add_at("A", "", 1).unwrap();
        assert!(!controller.is_empty());
        let id = controller.rows()[0].id;
        controller.remove(id).unwrap();
        assert!(controller.is_empty());
    }

    #[test]
    fn test_reorder_and_remove() {
        let controller = PendingController::new();
        controller.add_at("A", "", 1).unwrap();
        controller.add_at("B", "", 2).unwrap();
        controller.add_at("C", "", 3).unwrap();
        controller.reorder(Reorder { from: 2, to: 0 }).unwrap();
        let order: Vec<String> = controller.rows().into_iter().map(|r| r.claim_number).collect();
        assert_eq!(order, vec!["C", "A", "B"]);

        let id = controller.rows()[1].id;
        controller.remove(id).unwrap();
        assert_eq!(controller.len(), 2);
    }
}
