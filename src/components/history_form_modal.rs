//! History Form Modal Component
//!
//! Create/update form for a sale record.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, EditSession};
use crate::context::use_app_context;
use crate::crud::{self, HistoryForm};
use crate::store::{store_set_history, use_board_store};

#[component]
pub fn HistoryFormModal(session: RwSignal<EditSession<HistoryForm>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = session.get_untracked();
        let backend = ctx.backend();

        spawn_local(async move {
            match crud::submit_history(&backend, current.editing_id, &current.form).await {
                Ok(applied) => {
                    session.set(EditSession::closed());
                    store_set_history(store, applied.rows);
                    if let Some(message) = applied.mutation.entry_message() {
                        alert(message);
                    }
                }
                Err(e) => {
                    log::warn!("[Board] history save failed: {}", e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let title = move || if session.with(|s| s.is_update()) { "Update sale" } else { "Record sale" };

    view! {
        <div id="history-modal" class="modal" class:active=move || session.with(|s| s.open)>
            <form id="history-form" class="modal-form" on:submit=on_submit>
                <h3>{title}</h3>
                <label>
                    "Buyer"
                    <input
                        id="history-buyer"
                        type="text"
                        required
                        prop:value=move || session.with(|s| s.form.buyer.clone())
                        on:input=move |ev| session.update(|s| s.form.buyer = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Item name"
                    <input
                        id="history-item"
                        type="text"
                        required
                        prop:value=move || session.with(|s| s.form.item_name.clone())
                        on:input=move |ev| session.update(|s| s.form.item_name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Price"
                    <input
                        id="history-price"
                        type="number"
                        step="0.01"
                        required
                        prop:value=move || session.with(|s| s.form.price.clone())
                        on:input=move |ev| session.update(|s| s.form.price = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Amount sold"
                    <input
                        id="history-quantity"
                        type="number"
                        step="1"
                        required
                        prop:value=move || session.with(|s| s.form.amount.clone())
                        on:input=move |ev| session.update(|s| s.form.amount = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="submit" class="cta-button">"Save"</button>
                    <button
                        id="history-cancel"
                        type="button"
                        class="cta-button cta-secondary"
                        on:click=move |_| session.set(EditSession::closed())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
