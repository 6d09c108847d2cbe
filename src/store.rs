//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ProcessingStats, ScheduleSettings, ScheduleStatus};

/// Backend-reported state shared by several panels
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Average processing time, None until loaded
    pub processing_stats: Option<ProcessingStats>,
    /// Working hours as stored by the backend
    pub schedule_settings: Option<ScheduleSettings>,
    /// Last schedule status reported by the backend
    pub schedule_status: Option<ScheduleStatus>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_stats(store: &DashboardStore, stats: ProcessingStats) {
    store.processing_stats().set(Some(stats));
}

/// Tracked read of the processing stats
pub fn store_stats(store: &DashboardStore) -> Option<ProcessingStats> {
    store.processing_stats().get()
}

pub fn store_set_schedule_settings(store: &DashboardStore, settings: ScheduleSettings) {
    store.schedule_settings().set(Some(settings));
}

pub fn store_schedule_settings(store: &DashboardStore) -> Option<ScheduleSettings> {
    store.schedule_settings().get()
}

pub fn store_set_schedule_status(store: &DashboardStore, status: ScheduleStatus) {
    store.schedule_status().set(Some(status));
}

pub fn store_schedule_status(store: &DashboardStore) -> Option<ScheduleStatus> {
    store.schedule_status().get()
}
