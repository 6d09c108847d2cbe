//! Security Panel Component
//!
//! Risk overview, recent alerts and manual IP blocking.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SecurityUtility;
use crate::context::{use_app_context, AppContext};
use crate::error::ApiError;
use crate::models::{ActionResponse, SecurityAlert, SecurityStatus};
use crate::poll::start_polling;
use crate::security::{pretty_export, risk_class, risk_label, validate_ip};

const LOGIN_PAGE: &str = "/auth/login";

#[derive(Clone, Copy)]
struct SecuritySignals {
    status: RwSignal<Option<SecurityStatus>>,
    alerts: RwSignal<Vec<SecurityAlert>>,
    alerts_error: RwSignal<Option<String>>,
    /// Set while a status load is running; overlapping polls are skipped
    loading: RwSignal<bool>,
}

fn redirect_to_login() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(LOGIN_PAGE);
    }
}

fn load_status(ctx: AppContext, sig: SecuritySignals) {
    // Also reached after an await, when the panel may already be gone
    let Some(false) = sig.loading.try_get_untracked() else { return };
    sig.loading.try_set(true);
    let api = ctx.api();
    spawn_local(async move {
        match api.security_status().await {
            Ok(status) => {
                sig.status.try_set(Some(status));
            }
            Err(ApiError::Unauthorized) => redirect_to_login(),
            Err(e) => error!("[SECURITY] Status load failed: {}", e),
        }
        sig.loading.try_set(false);
    });
}

fn load_alerts(ctx: AppContext, sig: SecuritySignals) {
    if sig.alerts_error.try_get_untracked().is_none() {
        return;
    }
    let api = ctx.api();
    let limit = ctx.config().alerts_limit;
    spawn_local(async move {
        match api.security_alerts(limit).await {
            Ok(list) => {
                sig.alerts.try_set(list.alerts);
                sig.alerts_error.try_set(None);
            }
            Err(e) => {
                error!("[SECURITY] Alerts load failed: {}", e);
                sig.alerts_error.try_set(Some(format!("Ошибка загрузки алертов: {}", e)));
            }
        }
    });
}

/// Message to show for an action reply
fn action_text(reply: &ActionResponse, fallback: &str) -> (String, bool) {
    match (&reply.message, &reply.detail) {
        (Some(message), _) => (message.clone(), true),
        (None, Some(detail)) => (detail.clone(), false),
        (None, None) => (fallback.to_string(), false),
    }
}

#[component]
pub fn SecurityPanel() -> impl IntoView {
    let ctx = use_app_context();
    let sig = SecuritySignals {
        status: RwSignal::new(None),
        alerts: RwSignal::new(Vec::new()),
        alerts_error: RwSignal::new(None),
        loading: RwSignal::new(false),
    };
    let (ip_input, set_ip_input) = signal(String::new());
    let (ip_result, set_ip_result) = signal(None::<(String, bool)>);
    let (export_text, set_export_text) = signal(None::<String>);

    log!("[SECURITY] Panel mounted");
    load_status(ctx, sig);
    load_alerts(ctx, sig);
    start_polling(ctx.config().security_poll_ms, move || {
        load_status(ctx, sig);
        load_alerts(ctx, sig);
    });

    let ip_action = move |ban: bool| {
        let ip = match validate_ip(&ip_input.get_untracked()) {
            Ok(ip) => ip,
            Err(e) => {
                set_ip_result.set(Some((e.to_string(), false)));
                return;
            }
        };
        let api = ctx.api();
        let duration = ctx.config().ban_duration_secs;
        spawn_local(async move {
            let reply = if ban { api.ban_ip(&ip, duration).await } else { api.unban_ip(&ip).await };
            let fallback = if ban { "Ошибка блокировки" } else { "Ошибка разблокировки" };
            let shown = match reply {
                Ok(reply) => action_text(&reply, fallback),
                Err(e) => {
                    error!("[SECURITY] IP action failed: {}", e);
                    (fallback.to_string(), false)
                }
            };
            let ok = shown.1;
            set_ip_result.try_set(Some(shown));
            if ok {
                load_status(ctx, sig);
            }
        });
    };

    let utility = move |which: SecurityUtility| {
        let api = ctx.api();
        spawn_local(async move {
            match api.security_utility(which).await {
                Ok(reply) => {
                    let (text, ok) = action_text(&reply, "Ошибка выполнения операции");
                    if ok { ctx.success(text) } else { ctx.error(text) }
                    load_status(ctx, sig);
                    load_alerts(ctx, sig);
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let on_export = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.security_export().await {
                Ok(export) => {
                    set_export_text.try_set(Some(pretty_export(&export.export_data)));
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let stats = move || sig.status.get().unwrap_or_default();

    view! {
        <div class="security-panel">
            <div class="status-cards">
                {move || {
                    let level = stats().overall_risk_level.unwrap_or_else(|| "UNKNOWN".to_string());
                    view! {
                        <div id="overall-status" class=format!("status-value {}", risk_class(&level))>
                            "Уровень риска: " {risk_label(&level)}
                        </div>
                    }
                }}
                <div id="rate-limit-status">
                    {move || format!("Активно | {} заблокированных IP", stats().rate_limiting.statistics.blocked_ips_count)}
                </div>
                <div id="ddos-status">
                    {move || format!("Активно | {} заблокированных IP", stats().ddos_protection.statistics.blocked_ips_count)}
                </div>
                <div id="monitoring-status">
                    {move || format!("Активно | {} событий", stats().security_monitoring.statistics.total_events)}
                </div>
            </div>

            <div class="security-stats">
                <span>"Событий: " <b id="total-events">{move || stats().security_monitoring.statistics.total_events}</b></span>
                <span>"Заблокировано IP: " <b id="blocked-ips">{move || stats().security_monitoring.statistics.blocked_ips}</b></span>
                <span>"Высокий риск: " <b id="high-risk-events">{move || stats().security_monitoring.statistics.high_risk_events}</b></span>
                <span>"Критических: " <b id="critical-events">{move || stats().security_monitoring.statistics.critical_events}</b></span>
            </div>

            <div class="alerts">
                <h3>"Последние алерты"</h3>
                {move || {
                    if let Some(message) = sig.alerts_error.get() {
                        return view! { <div class="empty-message">{message}</div> }.into_any();
                    }
                    let alerts = sig.alerts.get();
                    if alerts.is_empty() {
                        return view! { <div class="empty-message">"Нет активных алертов"</div> }.into_any();
                    }
                    alerts.into_iter().map(|alert| view! {
                        <div class="alert-item">
                            <div class="alert-header">
                                <span class=format!("alert-level {}", alert.level.to_lowercase())>{alert.level.clone()}</span>
                                <span class="alert-time">{alert.timestamp.clone()}</span>
                            </div>
                            <div class="alert-message">{alert.message.clone()}</div>
                            <div class="alert-details">{format!("IP: {} | Событий: {}", alert.ip, alert.events_count)}</div>
                        </div>
                    }).collect_view().into_any()
                }}
            </div>

            <div class="ip-management">
                <input
                    type="text"
                    placeholder="IP адрес"
                    prop:value=move || ip_input.get()
                    on:input=move |ev| set_ip_input.set(event_target_value(&ev))
                />
                <button id="ban-ip-btn" class="danger-btn" on:click=move |_| ip_action(true)>"Заблокировать"</button>
                <button id="unban-ip-btn" on:click=move |_| ip_action(false)>"Разблокировать"</button>
                {move || ip_result.get().map(|(text, ok)| view! {
                    <div class=if ok { "ip-result success" } else { "ip-result error" }>{text}</div>
                })}
            </div>

            <div class="security-tools">
                <button id="export-btn" on:click=on_export>"Экспорт"</button>
                <button id="clear-events-btn" on:click=move |_| utility(SecurityUtility::ClearEvents)>"Очистить события"</button>
                <button id="clear-alerts-btn" on:click=move |_| utility(SecurityUtility::ClearAlerts)>"Очистить алерты"</button>
            </div>
            {move || export_text.get().map(|text| view! { <pre class="export-output">{text}</pre> })}
        </div>
    }
}
