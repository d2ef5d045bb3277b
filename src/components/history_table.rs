//! History Table Component
//!
//! Sales records filtered by the search box, with update/delete actions.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PlaceholderRow};
use crate::models::HistoryEntry;
use crate::store::{use_board_store, visible_history, BoardStateStoreFields};
use crate::table::TableBody;

#[component]
pub fn HistoryTable(
    #[prop(into)] on_edit: Callback<HistoryEntry>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_board_store();

    view! {
        <table class="board-table">
            <thead>
                <tr>
                    <th>"Buyer"</th>
                    <th>"Item"</th>
                    <th>"Price"</th>
                    <th>"Amount"</th>
                    <th>"Time"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="history-body">
                {move || match store.history().get() {
                    // Filtering only hides rows; no hits leaves the body empty
                    TableBody::Rows(rows) => {
                        let search = store.search().get();
                        visible_history(&rows, &search)
                            .into_iter()
                            .map(|entry| history_row(entry, on_edit, on_delete))
                            .collect_view()
                            .into_any()
                    }
                    other => view! {
                        <PlaceholderRow colspan=6 text=other.placeholder().unwrap_or_default() />
                    }.into_any(),
                }}
            </tbody>
        </table>
    }
}

fn history_row(entry: HistoryEntry, on_edit: Callback<HistoryEntry>, on_delete: Callback<String>) -> impl IntoView {
    let id = entry.id.clone();
    let edit_entry = entry.clone();
    view! {
        <tr>
            <td>{entry.display_buyer()}</td>
            <td>{entry.display_item()}</td>
            <td>{entry.display_price()}</td>
            <td>{entry.display_amount()}</td>
            <td>{entry.display_time()}</td>
            <td class="row-actions">
                <button
                    class="cta-button cta-secondary row-btn"
                    on:click=move |_| on_edit.run(edit_entry.clone())
                >
                    "Update"
                </button>
                <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| on_delete.run(id.clone())) />
            </td>
        </tr>
    }
}
