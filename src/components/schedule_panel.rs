//! Schedule Panel Component
//!
//! Working hours editor with the backend status and a local clock line.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::models::ScheduleSettings;
use crate::poll::start_polling;
use crate::schedule::{current_minute_of_day, local_window_label, parse_hhmm, status_label};
use crate::store::{
    store_schedule_settings, store_schedule_status, store_set_schedule_settings, store_set_schedule_status,
    use_dashboard_store, DashboardStore,
};

async fn refresh_status(api: &ApiClient, store: DashboardStore) {
    match api.get_schedule_status().await {
        Ok(status) => store_set_schedule_status(&store, status),
        Err(e) => error!("[SCHEDULE] Failed to load status: {}", e),
    }
}

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let (start_input, set_start_input) = signal(String::new());
    let (end_input, set_end_input) = signal(String::new());
    let (now_minute, set_now_minute) = signal(current_minute_of_day());

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.get_schedule_settings().await {
                Ok(settings) => {
                    set_start_input.try_set(settings.start_time.clone());
                    set_end_input.try_set(settings.end_time.clone());
                    store_set_schedule_settings(&store, settings);
                }
                Err(e) => error!("[SCHEDULE] Failed to load settings: {}", e),
            }
            refresh_status(&api, store).await;
        });
    });

    start_polling(ctx.config().clock_tick_ms, move || set_now_minute.set(current_minute_of_day()));

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let start = start_input.get_untracked();
        let end = end_input.get_untracked();
        if parse_hhmm(&start).is_none() || parse_hhmm(&end).is_none() {
            ctx.show_error_modal(ValidationError::InvalidTime.to_string());
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let settings = ScheduleSettings { start_time: start, end_time: end };
            match api.save_schedule_settings(&settings).await {
                Ok(saved) => {
                    store_set_schedule_settings(&store, saved);
                    ctx.success("Время работы сохранено");
                    refresh_status(&api, store).await;
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let local_line = move || {
        let settings = store_schedule_settings(&store)?;
        let start = parse_hhmm(&settings.start_time)?;
        let end = parse_hhmm(&settings.end_time)?;
        Some(local_window_label(now_minute.get(), start, end))
    };

    view! {
        <div class="schedule-panel">
            <h3>"Время работы парсера"</h3>
            <form class="schedule-form" on:submit=on_save>
                <input
                    type="time"
                    prop:value=move || start_input.get()
                    on:input=move |ev| set_start_input.set(event_target_value(&ev))
                />
                <span>"—"</span>
                <input
                    type="time"
                    prop:value=move || end_input.get()
                    on:input=move |ev| set_end_input.set(event_target_value(&ev))
                />
                <button type="submit">"Сохранить"</button>
            </form>
            {move || match store_schedule_status(&store) {
                Some(status) => {
                    let (text, class) = status_label(&status);
                    view! { <div id="schedule-status" class=class>{text}</div> }.into_any()
                }
                None => view! { <div id="schedule-status" class="status-value">"—"</div> }.into_any(),
            }}
            {move || local_line().map(|line| view! { <div class="schedule-local">{line}</div> })}
        </div>
    }
}
