//! History Table Component
//!
//! Per-day success/error table with date and status filters.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::history::{build_table, HistoryFilter, HistoryTable, StatusFilter};

#[component]
pub fn HistoryTableView() -> impl IntoView {
    let ctx = use_app_context();

    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (status, set_status) = signal(StatusFilter::All);
    let (table, set_table) = signal(HistoryTable::default());

    let current_filter = move || HistoryFilter {
        start_date: start_date.get(),
        end_date: end_date.get(),
        status: status.get(),
    };

    let apply = move || {
        let filter = current_filter();
        let api = ctx.api();
        log!("[HISTORY] Applying filters {:?}", filter);
        spawn_local(async move {
            match api.history_table(&filter).await {
                Ok(data) => match &data.error {
                    Some(message) => ctx.error(message.clone()),
                    None => {
                        set_table.try_set(build_table(&data, filter.status));
                    }
                },
                Err(e) => {
                    error!("[HISTORY] Load failed: {}", e);
                    ctx.error("Ошибка при загрузке данных");
                }
            }
        });
    };

    // Initial load
    Effect::new(move |_| untrack(apply));

    let export_href = move || ctx.api().history_export_url(&current_filter());
    let export_name = move || {
        let today: String = js_sys::Date::new_0().to_iso_string().into();
        format!("history_table_{}.xlsx", &today[..10.min(today.len())])
    };

    view! {
        <div class="history-view">
            <div class="history-filters">
                <input
                    id="start-date"
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />
                <input
                    id="end-date"
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />
                <select
                    id="status-filter"
                    on:change=move |ev| set_status.set(StatusFilter::parse(&event_target_value(&ev)))
                    prop:value=move || status.get().as_str()
                >
                    <option value="all">"Все"</option>
                    <option value="success">"Успешные"</option>
                    <option value="error">"Сбои"</option>
                </select>
                <button id="apply-filters" on:click=move |_| apply()>"Применить"</button>
                <button id="clear-dates" on:click=move |_| {
                    set_start_date.set(String::new());
                    set_end_date.set(String::new());
                    apply();
                }>"Сбросить даты"</button>
                <button id="clear-filters" on:click=move |_| {
                    set_start_date.set(String::new());
                    set_end_date.set(String::new());
                    set_status.set(StatusFilter::All);
                    apply();
                }>"Сбросить фильтры"</button>
                <a id="export-excel" class="button" href=export_href download=export_name>"Экспорт в Excel"</a>
            </div>
            <div class="table-container">
                {move || {
                    let t = table.get();
                    if t.is_empty() {
                        return view! { <div class="no-data"><p>"Нет данных для отображения"</p></div> }.into_any();
                    }
                    view! {
                        <table class="history-table">
                            <thead>
                                <tr>
                                    <th class="row-header">"Дата"</th>
                                    {t.dates.iter().map(|d| view! { <th class="date-header">{d.clone()}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {t.rows.iter().map(|row| view! {
                                    <tr class=row.kind.class()>
                                        <td class="row-label">{row.label}</td>
                                        {row.cells.iter().map(|c| view! { <td>{c.clone()}</td> }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
