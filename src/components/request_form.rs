//! Request Form Component
//!
//! Claim number / VIN inputs that append to the pending list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::PendingController;

#[component]
pub fn RequestForm(controller: PendingController) -> impl IntoView {
    let ctx = use_app_context();

    let (claim, set_claim) = signal(String::new());
    let (vin, set_vin) = signal(String::new());

    let add_request = move |_ev: web_sys::MouseEvent| {
        match controller.add(&claim.get_untracked(), &vin.get_untracked()) {
            Ok(()) => {
                set_claim.set(String::new());
                set_vin.set(String::new());
            }
            Err(e) => ctx.show_error_modal(e.to_string()),
        }
    };

    view! {
        <div class="request-form">
            <div class="form-group">
                <label for="claim_number">"Номер дела"</label>
                <input
                    id="claim_number"
                    type="text"
                    placeholder="Введите номер дела"
                    prop:value=move || claim.get()
                    on:input=move |ev| set_claim.set(event_target_value(&ev))
                    prop:disabled=move || controller.is_submitting()
                />
            </div>
            <div class="form-group">
                <label for="vin_number">"VIN номер"</label>
                <input
                    id="vin_number"
                    type="text"
                    placeholder="Введите VIN"
                    prop:value=move || vin.get()
                    on:input=move |ev| set_vin.set(event_target_value(&ev))
                    prop:disabled=move || controller.is_submitting()
                />
            </div>
            <button
                id="add-request-btn"
                type="button"
                on:click=add_request
                prop:disabled=move || controller.is_submitting()
            >
                "Добавить заявку"
            </button>
        </div>
    }
}
