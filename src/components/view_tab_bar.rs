//! View Tab Bar Component
//!
//! Tab bar for switching between dashboard views.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Requests,
    Queue,
    History,
    Security,
}

impl DashboardView {
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Requests,
        DashboardView::Queue,
        DashboardView::History,
        DashboardView::Security,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Requests => "Заявки",
            DashboardView::Queue => "Очередь",
            DashboardView::History => "История",
            DashboardView::Security => "Безопасность",
        }
    }
}

/// View Tab Bar component
#[component]
pub fn ViewTabBar(
    current_view: ReadSignal<DashboardView>,
    set_current_view: WriteSignal<DashboardView>,
) -> impl IntoView {
    view! {
        <nav class="view-tab-bar">
            {DashboardView::ALL.iter().map(|&v| {
                let tab_class = move || {
                    if current_view.get() == v { "view-tab active" } else { "view-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_current_view.set(v)>
                        {v.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
