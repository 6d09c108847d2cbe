//! Timers tied to a component's lifetime

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Run `tick` every `period_ms` until the calling component unmounts
pub fn start_polling(period_ms: u32, tick: impl Fn() + 'static) {
    let interval = Interval::new(period_ms, tick);
    let handle = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        handle.try_update_value(|slot| {
            if let Some(interval) = slot.take() {
                interval.cancel();
            }
        });
    });
}
