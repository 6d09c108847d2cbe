//! Submit Form Component
//!
//! Login credentials plus the button that sends the whole pending list.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller::PendingController;
use crate::error::BatchError;
use crate::models::Credentials;

const SUBMIT_LABEL: &str = "Войти";

#[component]
pub fn SubmitForm(controller: PendingController) -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (svg_collection, set_svg_collection) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
            svg_collection: svg_collection.get_untracked(),
        };
        let api = ctx.api();
        let delay_ms = ctx.config().submit_delay_ms;

        spawn_local(async move {
            match controller.submit(&api, &credentials, delay_ms).await {
                Ok(report) => ctx.success(report.message()),
                Err(BatchError::Transport(e)) => {
                    error!("[SUBMIT] Transport failure: {:?}", e);
                    ctx.show_error_modal(BatchError::Transport(e).to_string());
                }
                Err(e) => ctx.show_error_modal(e.to_string()),
            }
        });
    };

    view! {
        <form id="login-form" class="login-form" on:submit=on_submit>
            <div class="form-group">
                <label for="username">"Логин"</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="password">"Пароль"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group toggle">
                <label for="svg_collection">"Сбор SVG"</label>
                <input
                    id="svg_collection"
                    name="svg_collection"
                    type="checkbox"
                    prop:checked=move || svg_collection.get()
                    on:change=move |ev| set_svg_collection.set(event_target_checked(&ev))
                />
                <span
                    id="svg-status"
                    class=move || if svg_collection.get() { "enabled" } else { "disabled" }
                >
                    {move || if svg_collection.get() { "Включен" } else { "Отключен" }}
                </span>
            </div>
            <button type="submit" prop:disabled=move || controller.is_submitting()>
                {move || controller.progress().unwrap_or_else(|| SUBMIT_LABEL.to_string())}
            </button>
        </form>
    }
}
