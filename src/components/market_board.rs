//! Market Board Component
//!
//! Items/history tabs with search, CRUD modals and row actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    alert, BoardTabBar, EditSession, HistoryFormModal, HistoryTable, ItemFormModal, PostingsTable,
};
use crate::context::use_app_context;
use crate::crud::{self, HistoryForm, ItemForm};
use crate::models::{HistoryEntry, Posting};
use crate::store::{
    store_set_history, store_set_postings, store_sort_history, use_board_store, BoardStateStoreFields, BoardTab,
};

/// Quiet period before a search keystroke hits the server
const SEARCH_DEBOUNCE_MS: u32 = 200;

#[component]
pub fn MarketBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let item_session = RwSignal::new(EditSession::<ItemForm>::closed());
    let history_session = RwSignal::new(EditSession::<HistoryForm>::closed());

    // History is loaded up front so switching tabs never starts empty
    Effect::new(move |_| {
        let backend = ctx.backend();
        spawn_local(async move {
            store_set_history(store, api::list_history(&backend).await);
        });
    });

    // Load the active tab whenever a tab is clicked
    Effect::new(move |_| {
        let tab = store.active_tab().get();
        let backend = ctx.backend();
        match tab {
            BoardTab::Items => {
                let search = store.search().get_untracked();
                spawn_local(async move {
                    store_set_postings(store, api::list_postings(&backend, &search).await);
                });
            }
            BoardTab::History => {
                spawn_local(async move {
                    store_set_history(store, api::list_history(&backend).await);
                });
            }
        }
    });

    let on_search = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        *store.search().write() = query.clone();
        if store.active_tab().get_untracked() != BoardTab::Items {
            // History filters client-side through the store
            return;
        }
        let backend = ctx.backend();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if store.search().get_untracked() != query {
                return;
            }
            log::debug!("[Board] searching postings for {:?}", query);
            store_set_postings(store, api::list_postings(&backend, &query).await);
        });
    };

    let edit_posting = Callback::new(move |posting: Posting| {
        item_session.set(EditSession::edit(posting.id.clone(), ItemForm::from_posting(&posting)));
    });

    let delete_posting = Callback::new(move |id: String| {
        let backend = ctx.backend();
        let search = store.search().get_untracked();
        spawn_local(async move {
            match crud::remove_item(&backend, &id, &search).await {
                Ok(applied) => store_set_postings(store, applied.rows),
                Err(e) => alert(&e.to_string()),
            }
        });
    });

    let edit_entry = Callback::new(move |entry: HistoryEntry| {
        history_session.set(EditSession::edit(entry.id.clone(), HistoryForm::from_entry(&entry)));
    });

    let delete_entry = Callback::new(move |id: String| {
        let backend = ctx.backend();
        spawn_local(async move {
            match crud::remove_history(&backend, &id).await {
                Ok(applied) => store_set_history(store, applied.rows),
                Err(e) => alert(&e.to_string()),
            }
        });
    });

    let sort_label = move || {
        if store.history_newest_first().get() { "Sort by time (newest first)" } else { "Sort by time (oldest first)" }
    };

    view! {
        <section class="market-board">
            <div class="board-toolbar">
                <BoardTabBar />
                <input
                    id="search-input"
                    type="search"
                    placeholder="Search..."
                    prop:value=move || store.search().get()
                    on:input=on_search
                />
            </div>

            <Show when=move || store.active_tab().get() == BoardTab::Items>
                <div id="items-tab" class="content-panel active">
                    <div class="panel-actions">
                        <button class="cta-button" on:click=move |_| item_session.set(EditSession::create())>
                            "Add item"
                        </button>
                    </div>
                    <PostingsTable on_edit=edit_posting on_delete=delete_posting />
                </div>
            </Show>

            <Show when=move || store.active_tab().get() == BoardTab::History>
                <div id="history-tab" class="content-panel active">
                    <div class="panel-actions">
                        <button class="cta-button" on:click=move |_| history_session.set(EditSession::create())>
                            "Add sale"
                        </button>
                        <button class="cta-button cta-secondary" on:click=move |_| store_sort_history(store)>
                            {sort_label}
                        </button>
                    </div>
                    <HistoryTable on_edit=edit_entry on_delete=delete_entry />
                </div>
            </Show>

            <ItemFormModal session=item_session />
            <HistoryFormModal session=history_session />
        </section>
    }
}
