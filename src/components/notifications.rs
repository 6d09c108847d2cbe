//! Notification Components
//!
//! Toast stack in the corner and the error modal.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Corner toasts; each expires on its own timer
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notification-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| ctx.dismiss(id)>
                            <div class="notification-content">
                                <span class="notification-icon">{toast.kind.icon()}</span>
                                <span class="notification-message">{toast.message.clone()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Error modal. Closes on backdrop click, the close button or Escape.
#[component]
pub fn ErrorModal() -> impl IntoView {
    let ctx = use_app_context();

    let escape = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && ctx.modal.get_untracked().is_some() {
            ctx.close_error_modal();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            id="error-modal"
            class=move || if ctx.modal.get().is_some() { "modal show" } else { "modal" }
            on:click=move |ev: web_sys::MouseEvent| {
                // Only the backdrop itself, not clicks bubbling from the dialog
                if ev.target() == ev.current_target() {
                    ctx.close_error_modal();
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <span class="modal-title">"Ошибка"</span>
                    <button class="modal-close" on:click=move |_| ctx.close_error_modal()>"×"</button>
                </div>
                <p id="error-message">{move || ctx.modal.get().unwrap_or_default()}</p>
            </div>
        </div>
    }
}
