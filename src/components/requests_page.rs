//! Requests Page Component
//!
//! Pending list, login form and the processing side panels.

use leptos::prelude::*;

use crate::controller::PendingController;

use super::{RequestForm, RequestList, SchedulePanel, StatsPanel, StopParserButton, SubmitForm};

#[component]
pub fn RequestsPage() -> impl IntoView {
    // The pending list lives as long as this view
    let controller = PendingController::new();

    view! {
        <div class="requests-page">
            <section class="requests-column">
                <RequestForm controller=controller />
                <RequestList controller=controller />
            </section>
            <aside class="side-column">
                <SubmitForm controller=controller />
                <StatsPanel controller=controller />
                <StopParserButton />
                <SchedulePanel />
            </aside>
        </div>
    }
}
