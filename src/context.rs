//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::logging::error;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::notify::{dismiss_toast, replace_toast, track_timer, untrack_timer, Toast, ToastKind};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<DashboardConfig>,
    api: StoredValue<ApiClient>,
    /// Visible toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Error modal text (None = closed) - read
    pub modal: ReadSignal<Option<String>>,
    /// Error modal text (None = closed) - write
    set_modal: WriteSignal<Option<String>>,
    next_toast_id: StoredValue<u64>,
    /// Expiry timers of visible toasts; dropping one cancels it
    toast_timers: StoredValue<Vec<(u64, Timeout)>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        let api = ApiClient::new(config.api_base.clone());
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        let (modal, set_modal) = signal(None::<String>);
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            toasts,
            set_toasts,
            modal,
            set_modal,
            next_toast_id: StoredValue::new(0),
            toast_timers: StoredValue::new_local(Vec::new()),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Show a toast that disappears after the configured time
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_value() + 1;
        self.next_toast_id.set_value(id);
        self.set_toasts.update(|t| replace_toast(t, Toast { id, kind, message: message.into() }));

        let set_toasts = self.set_toasts;
        let timer = Timeout::new(self.config.get_value().toast_ms, move || {
            set_toasts.try_update(|t| dismiss_toast(t, id));
        });
        self.toast_timers.update_value(|timers| track_timer(timers, id, timer));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    /// Error toast, also written to the console
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("[UI] {}", message);
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|t| dismiss_toast(t, id));
        self.toast_timers.update_value(|timers| untrack_timer(timers, id));
    }

    /// Open the modal for errors the user must acknowledge
    pub fn show_error_modal(&self, message: impl Into<String>) {
        self.set_modal.set(Some(message.into()));
    }

    pub fn close_error_modal(&self) {
        self.set_modal.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
