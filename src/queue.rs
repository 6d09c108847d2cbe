//! Queue Monitor View Model

use crate::models::{QueueRequests, QueueStats, QueuedRequest};

const NOT_GIVEN: &str = "Не указан";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSection {
    Pending,
    Processing,
    Completed,
}

impl QueueSection {
    pub fn empty_message(&self) -> &'static str {
        match self {
            QueueSection::Pending => "Очередь пуста",
            QueueSection::Processing => "Нет заявок в обработке",
            QueueSection::Completed => "Нет завершенных заявок",
        }
    }
}

/// Counters shown above the lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueCounters {
    pub running: bool,
    pub queued: u64,
    pub processing: u64,
    pub processed: u64,
    pub failed: u64,
}

impl QueueCounters {
    pub fn from_stats(stats: &QueueStats) -> Self {
        Self {
            running: stats.is_running,
            queued: stats.queue_length,
            processing: stats.processing_count,
            processed: stats.processed_count,
            failed: stats.failed_count,
        }
    }

    /// The request lists are fresher than the stats endpoint; prefer them
    pub fn refine(self, requests: &QueueRequests) -> Self {
        let completed = &requests.completed_requests;
        Self {
            queued: requests.pending_count,
            processing: requests.processing_count,
            processed: completed.iter().filter(|r| r.success != Some(false)).count() as u64,
            failed: completed.iter().filter(|r| r.success == Some(false)).count() as u64,
            ..self
        }
    }

    pub fn status_text(&self) -> (&'static str, &'static str) {
        if self.running {
            ("Запущена", "status-value running")
        } else {
            ("Остановлена", "status-value stopped")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItemView {
    pub title: String,
    pub status_text: &'static str,
    pub status_class: &'static str,
    pub added_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub svg_label: &'static str,
}

pub fn item_view(request: &QueuedRequest, section: QueueSection) -> QueueItemView {
    let field = |v: &Option<String>| v.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| NOT_GIVEN.to_string());
    let (status_text, status_class) = match section {
        QueueSection::Pending => ("В очереди", "pending"),
        QueueSection::Processing => ("В обработке", "processing"),
        QueueSection::Completed if request.success == Some(true) => ("Завершена", "completed"),
        QueueSection::Completed => ("Ошибка", "failed"),
    };
    QueueItemView {
        title: format!("{} | {}", field(&request.claim_number), field(&request.vin_number)),
        status_text,
        status_class,
        added_at: request.added_at.clone(),
        started_at: request.started_at.clone(),
        completed_at: request.completed_at.clone(),
        svg_label: if request.svg_collection { "Включен" } else { "Отключен" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(success: Option<bool>) -> QueuedRequest {
        QueuedRequest { claim_number: Some("A-1".into()), success, ..Default::default() }
    }

    #[test]
    fn test_refine_counts_completed() {
        let stats = QueueStats { is_running: true, queue_length: 9, processed_count: 9, ..Default::default() };
        let requests = QueueRequests {
            completed_requests: vec![done(Some(true)), done(None), done(Some(false))],
            pending_count: 2,
            processing_count: 1,
            ..Default::default()
        };
        let counters = QueueCounters::from_stats(&stats).refine(&requests);
        assert!(counters.running);
        assert_eq!(counters.queued, 2);
        assert_eq!(counters.processing, 1);
        assert_eq!(counters.processed, 2);
        assert_eq!(counters.failed, 1);
    }

    #[test]
    fn test_item_view_fills_missing_fields() {
        let view = item_view(&done(Some(false)), QueueSection::Completed);
        assert_eq!(view.title, "A-1 | Не указан");
        assert_eq!(view.status_class, "failed");
        assert_eq!(view.svg_label, "Отключен");
    }
}
