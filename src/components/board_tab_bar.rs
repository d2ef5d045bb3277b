//! Board Tab Bar Component
//!
//! Tab bar for switching between the items and history panels.

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields, BoardTab};

/// Board tab bar; clicking a tab (even the active one) reloads it
#[component]
pub fn BoardTabBar() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="tab-bar">
            {BoardTab::ALL.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || store.active_tab().get() == tab;
                let tab_class = move || {
                    if is_active() { "tab-item active" } else { "tab-item" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| { *store.active_tab().write() = tab; }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
