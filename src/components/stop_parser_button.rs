//! Stop Parser Button Component

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TerminateResponse;

/// Text and CSS class for a /terminate reply
fn outcome(reply: &TerminateResponse) -> (String, &'static str) {
    if reply.status.as_deref() == Some("success") {
        let text = reply.message.clone().unwrap_or_else(|| "Парсер успешно остановлен.".to_string());
        (text, "notification success")
    } else {
        let text = reply
            .error
            .clone()
            .or_else(|| reply.message.clone())
            .unwrap_or_else(|| "Ошибка при остановке парсера.".to_string());
        (text, "notification error")
    }
}

#[component]
pub fn StopParserButton() -> impl IntoView {
    let ctx = use_app_context();
    let (busy, set_busy) = signal(false);
    let (result, set_result) = signal(None::<(String, &'static str)>);

    let on_click = move |_| {
        set_busy.set(true);
        let api = ctx.api();
        spawn_local(async move {
            log!("[PARSER] POST /terminate");
            let shown = match api.terminate().await {
                Ok(reply) => outcome(&reply),
                Err(e) => {
                    error!("[PARSER] /terminate failed: {}", e);
                    ("Ошибка соединения с сервером.".to_string(), "notification error")
                }
            };
            set_result.try_set(Some(shown));
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="stop-parser">
            <button id="stop-parser-btn" class="danger-btn" prop:disabled=move || busy.get() on:click=on_click>
                {move || if busy.get() { "Остановка..." } else { "Остановить парсер" }}
            </button>
            {move || result.get().map(|(text, class)| view! {
                <div id="stop-parser-notification" class=class>{text}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_prefers_error_text() {
        let reply = TerminateResponse { status: Some("error".into()), message: Some("m".into()), error: Some("e".into()) };
        assert_eq!(outcome(&reply), ("e".to_string(), "notification error"));
    }

    #[test]
    fn test_outcome_success_default() {
        let reply = TerminateResponse { status: Some("success".into()), ..Default::default() };
        assert_eq!(outcome(&reply).0, "Парсер успешно остановлен.");
    }
}
