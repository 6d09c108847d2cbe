//! Request List Component
//!
//! Renders the pending list with drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::controller::PendingController;
use crate::pending::RequestRow;

#[component]
pub fn RequestList(controller: PendingController) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals(controller.lock_signal());

    let on_reorder = move |reorder: Reorder| {
        if let Err(e) = controller.reorder(reorder) {
            ctx.error(e.to_string());
        }
    };

    view! {
        <div class="requests-header">
            <span>"Добавленные заявки: "</span>
            <span id="total-requests">{move || controller.len()}</span>
        </div>
        <div id="requests-list" class="requests-list">
            <Show
                when=move || !controller.is_empty()
                fallback=|| view! { <div class="empty-state">"Нет добавленных заявок"</div> }
            >
                // Keyed by (id, index) so a reorder re-binds the index-based drag handlers
                <For
                    each=move || controller.rows()
                    key=|row| (row.id, row.index)
                    children=move |row: RequestRow| {
                        let index = row.index;
                        let id = row.id;
                        view! {
                            <div
                                class=move || row_class(dnd, index, "request-item")
                                data-id=id.to_string()
                                draggable=move || if controller.is_submitting() { "false" } else { "true" }
                                on:dragstart=make_on_dragstart(dnd, index)
                                on:dragover=make_on_dragover()
                                on:dragenter=make_on_dragenter(dnd, index)
                                on:dragleave=make_on_dragleave(dnd, index)
                                on:drop=make_on_drop(dnd, index, on_reorder)
                                on:dragend=make_on_dragend(dnd)
                            >
                                <div class="request-number">{row.number}</div>
                                <div class="request-info">
                                    <div class="request-field">
                                        <span class="field-label">"Номер дела:"</span>
                                        <span class="field-value">{row.claim_number.clone()}</span>
                                    </div>
                                    <div class="request-field">
                                        <span class="field-label">"VIN:"</span>
                                        <span class="field-value">{row.vin_number.clone()}</span>
                                    </div>
                                </div>
                                <button
                                    class="remove-btn"
                                    title="Удалить заявку"
                                    prop:disabled=move || controller.is_submitting()
                                    on:click=move |_| {
                                        if let Err(e) = controller.remove(id) {
                                            ctx.error(e.to_string());
                                        }
                                    }
                                >
                                    <span class="remove-icon">"×"</span>
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
