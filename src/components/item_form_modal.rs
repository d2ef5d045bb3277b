//! Item Form Modal Component
//!
//! Create/update form for a listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{alert, EditSession};
use crate::context::use_app_context;
use crate::crud::{self, ItemForm};
use crate::store::{store_set_postings, use_board_store, BoardStateStoreFields};

#[component]
pub fn ItemFormModal(session: RwSignal<EditSession<ItemForm>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = session.get_untracked();
        let search = store.search().get_untracked();
        let backend = ctx.backend();

        spawn_local(async move {
            match crud::submit_item(&backend, current.editing_id, &current.form, &search).await {
                Ok(applied) => {
                    session.set(EditSession::closed());
                    store_set_postings(store, applied.rows);
                    if let Some(message) = applied.mutation.item_message() {
                        alert(message);
                    }
                }
                Err(e) => {
                    log::warn!("[Board] item save failed: {}", e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let title = move || if session.with(|s| s.is_update()) { "Update item" } else { "Add item" };

    view! {
        <div id="item-modal" class="modal" class:active=move || session.with(|s| s.open)>
            <form id="item-form" class="modal-form" on:submit=on_submit>
                <h3>{title}</h3>
                <label>
                    "Seller"
                    <input
                        id="item-username"
                        type="text"
                        prop:value=move || session.with(|s| s.form.username.clone())
                        on:input=move |ev| session.update(|s| s.form.username = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Item name"
                    <input
                        id="item-name"
                        type="text"
                        required
                        prop:value=move || session.with(|s| s.form.name.clone())
                        on:input=move |ev| session.update(|s| s.form.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Price"
                    <input
                        id="item-price"
                        type="number"
                        step="0.01"
                        required
                        prop:value=move || session.with(|s| s.form.price.clone())
                        on:input=move |ev| session.update(|s| s.form.price = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Quantity"
                    <input
                        id="item-quantity"
                        type="number"
                        step="1"
                        required
                        prop:value=move || session.with(|s| s.form.quantity.clone())
                        on:input=move |ev| session.update(|s| s.form.quantity = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="submit" class="cta-button">"Save"</button>
                    <button
                        id="item-cancel"
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
