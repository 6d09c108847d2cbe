//! Claim Queue Dashboard App
//!
//! Top-level layout: view tabs, the active view, toasts and the error modal.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    DashboardView, ErrorModal, HistoryTableView, QueueMonitor, RequestsPage, SecurityPanel, ToastStack, ViewTabBar,
};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();
    log!("[APP] Starting with API base '{}'", config.api_base);

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(Store::new(DashboardState::default()));

    let (current_view, set_current_view) = signal(DashboardView::Requests);

    view! {
        <div class="app-layout">
            <ViewTabBar current_view=current_view set_current_view=set_current_view />
            <main class="main-content">
                <h1>{move || current_view.get().title()}</h1>
                // Each view owns its timers and is torn down when switched away
                {move || match current_view.get() {
                    DashboardView::Requests => view! { <RequestsPage /> }.into_any(),
                    DashboardView::Queue => view! { <QueueMonitor /> }.into_any(),
                    DashboardView::History => view! { <HistoryTableView /> }.into_any(),
                    DashboardView::Security => view! { <SecurityPanel /> }.into_any(),
                }}
            </main>
            <ToastStack />
            <ErrorModal />
        </div>
    }
}
