//! Stats Panel Component
//!
//! Average processing time and the estimate for the current pending list.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller::PendingController;
use crate::stats::total_estimate;
use crate::store::{store_set_stats, store_stats, use_dashboard_store};

#[component]
pub fn StatsPanel(controller: PendingController) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    // Load on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.processing_stats().await {
                Ok(stats) => store_set_stats(&store, stats),
                Err(e) => error!("[STATS] Failed to load processing stats: {}", e),
            }
        });
    });

    let average = move || store_stats(&store).map(|s| s.average_time).unwrap_or_else(|| "—".to_string());
    let completed = move || store_stats(&store).map(|s| s.total_completed.to_string()).unwrap_or_else(|| "0".to_string());
    let total = move || total_estimate(store_stats(&store).as_ref(), controller.len());

    view! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-label">"Среднее время обработки: "</span>
                <span id="average-time" class="stat-value">{average}</span>
            </div>
            <div class="stat">
                <span class="stat-label">"Общее время: "</span>
                <span id="total-time" class="stat-value">{total}</span>
            </div>
            <div class="stat">
                <span class="stat-label">"Обработано всего: "</span>
                <span class="stat-value">{completed}</span>
            </div>
        </div>
    }
}
