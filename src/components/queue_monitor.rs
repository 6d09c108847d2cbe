//! Queue Monitor Component
//!
//! Live view of the backend queue with start/stop/clear controls.
//! Refreshes on a fixed interval while mounted.

use futures::future::join3;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::context::{use_app_context, AppContext};
use crate::models::{QueueRequests, QueuedRequest, ScheduleStatus};
use crate::poll::start_polling;
use crate::queue::{item_view, QueueCounters, QueueSection};
use crate::schedule::status_label;

/// Delay before re-reading the queue after a clear
const CLEAR_REFRESH_MS: u32 = 500;

fn local_time(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return "Неизвестно".to_string();
    }
    date.to_locale_string("ru-RU", &JsValue::UNDEFINED).into()
}

#[derive(Clone, Copy)]
struct QueueSignals {
    counters: RwSignal<QueueCounters>,
    requests: RwSignal<QueueRequests>,
    schedule: RwSignal<Option<ScheduleStatus>>,
}

fn load_queue(ctx: AppContext, sig: QueueSignals) {
    let api = ctx.api();
    spawn_local(async move {
        let (status, requests, schedule) = join3(api.queue_status(), api.queue_requests(), api.get_schedule_status()).await;

        // The view may have unmounted while the requests were in flight
        let Some(mut counters) = sig.counters.try_get_untracked() else { return };
        match status {
            Ok(resp) if resp.success => {
                if let Some(stats) = resp.data {
                    counters = QueueCounters::from_stats(&stats);
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!("[QUEUE] Status load failed: {}", e);
                ctx.error("Ошибка загрузки данных");
                return;
            }
        }
        if let Ok(resp) = requests {
            if let (true, Some(data)) = (resp.success, resp.data) {
                counters = counters.refine(&data);
                sig.requests.try_set(data);
            }
        }
        sig.counters.try_set(counters);
        match schedule {
            Ok(s) => {
                sig.schedule.try_set(Some(s));
            }
            Err(e) => error!("[QUEUE] Schedule status load failed: {}", e),
        }
    });
}

#[component]
fn QueueList(
    #[prop(into)] id: String,
    title: &'static str,
    section: QueueSection,
    items: Signal<Vec<QueuedRequest>>,
) -> impl IntoView {
    view! {
        <div class="queue-section">
            <h3>{title}</h3>
            <div id=id class="queue-list">
                {move || {
                    let list = items.get();
                    if list.is_empty() {
                        return view! { <div class="empty-message">{section.empty_message()}</div> }.into_any();
                    }
                    list.iter().map(|request| {
                        let v = item_view(request, section);
                        view! {
                            <div class="queue-item">
                                <div class="queue-item-header">
                                    <div class="queue-item-title">{v.title}</div>
                                    <span class=format!("queue-item-status {}", v.status_class)>{v.status_text}</span>
                                </div>
                                <div class="queue-item-details">
                                    <div>"Добавлена: " {v.added_at.as_deref().map(local_time).unwrap_or_else(|| "Неизвестно".to_string())}</div>
                                    {v.started_at.as_deref().map(|t| view! { <div>"Начата: " {local_time(t)}</div> })}
                                    {v.completed_at.as_deref().map(|t| view! { <div>"Завершена: " {local_time(t)}</div> })}
                                    <div>"SVG: " {v.svg_label}</div>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn QueueMonitor() -> impl IntoView {
    let ctx = use_app_context();
    let sig = QueueSignals {
        counters: RwSignal::new(QueueCounters::default()),
        requests: RwSignal::new(QueueRequests::default()),
        schedule: RwSignal::new(None),
    };

    load_queue(ctx, sig);
    start_polling(ctx.config().queue_poll_ms, move || load_queue(ctx, sig));

    let on_start = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.queue_start().await {
                Ok(resp) if resp.success => {
                    ctx.success("Обработка очереди запущена");
                    load_queue(ctx, sig);
                }
                Ok(resp) => ctx.error(resp.message.unwrap_or_else(|| "Ошибка запуска обработки".to_string())),
                Err(e) => {
                    error!("[QUEUE] Start failed: {}", e);
                    ctx.error("Ошибка запуска обработки");
                }
            }
        });
    };

    let on_stop = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.queue_stop().await {
                Ok(resp) if resp.success => {
                    ctx.success("Остановка обработки запрошена");
                    load_queue(ctx, sig);
                }
                Ok(resp) => ctx.error(resp.message.unwrap_or_else(|| "Ошибка остановки обработки".to_string())),
                Err(e) => {
                    error!("[QUEUE] Stop failed: {}", e);
                    ctx.error("Ошибка остановки обработки");
                }
            }
        });
    };

    let on_clear = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Вы уверены, что хотите очистить очередь? Это действие нельзя отменить.").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.queue_clear().await {
                Ok(resp) if resp.success => {
                    ctx.success(resp.message.unwrap_or_else(|| "Очередь очищена".to_string()));
                    TimeoutFuture::new(CLEAR_REFRESH_MS).await;
                    load_queue(ctx, sig);
                }
                Ok(resp) => ctx.error(resp.message.unwrap_or_else(|| "Ошибка очистки очереди".to_string())),
                Err(e) => {
                    error!("[QUEUE] Clear failed: {}", e);
                    ctx.error("Ошибка очистки очереди");
                }
            }
        });
    };

    let counters = move || sig.counters.get();
    let requests = sig.requests;

    view! {
        <div class="queue-monitor">
            <div class="queue-status">
                {move || {
                    let (text, class) = counters().status_text();
                    view! { <span id="processing-status" class=class>{text}</span> }
                }}
                <span>"В очереди: " <span id="queue-length">{move || counters().queued}</span></span>
                <span>"В обработке: " <span id="processing-count">{move || counters().processing}</span></span>
                <span>"Обработано: " <span id="processed-count">{move || counters().processed}</span></span>
                <span>"Ошибок: " <span id="failed-count">{move || counters().failed}</span></span>
                {move || match sig.schedule.get() {
                    Some(status) => {
                        let (text, class) = status_label(&status);
                        view! { <span id="schedule-status" class=class>{text}</span> }.into_any()
                    }
                    None => view! { <span id="schedule-status" class="status-value">"—"</span> }.into_any(),
                }}
            </div>
            <div class="queue-controls">
                <button id="start-btn" on:click=on_start>"Запустить"</button>
                <button id="stop-btn" on:click=on_stop>"Остановить"</button>
                <button id="clear-btn" class="danger-btn" on:click=on_clear>"Очистить"</button>
                <button id="refresh-btn" on:click=move |_| load_queue(ctx, sig)>"Обновить"</button>
            </div>
            <div class="queue-lists">
                <QueueList
                    id="queue-list"
                    title="Ожидают"
                    section=QueueSection::Pending
                    items=Signal::derive(move || requests.with(|r| r.pending_requests.clone()))
                />
                <QueueList
                    id="processing-list"
                    title="В обработке"
                    section=QueueSection::Processing
                    items=Signal::derive(move || requests.with(|r| r.processing_requests.clone()))
                />
                <QueueList
                    id="completed-list"
                    title="Завершены"
                    section=QueueSection::Completed
                    items=Signal::derive(move || requests.with(|r| r.completed_requests.clone()))
                />
            </div>
        </div>
    }
}
