//! Postings Table Component
//!
//! Items currently for sale, with update/delete actions per row.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, PlaceholderRow};
use crate::models::Posting;
use crate::store::{use_board_store, BoardStateStoreFields};
use crate::table::RenderedRow;

#[component]
pub fn PostingsTable(
    #[prop(into)] on_edit: Callback<Posting>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_board_store();

    view! {
        <table class="board-table">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"Price"</th>
                    <th>"Quantity"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="items-body">
                {move || {
                    let body = store.postings().get();
                    body.rendered().into_iter().map(|row| match row {
                        RenderedRow::Placeholder(text) => view! {
                            <PlaceholderRow colspan=4 text=text />
                        }.into_any(),
                        RenderedRow::Record(posting) => {
                            let posting = posting.clone();
                            let id = posting.id.clone();
                            let edit_posting = posting.clone();
                            view! {
                                <tr>
                                    <td>{posting.display_name()}</td>
                                    <td>{posting.display_price()}</td>
                                    <td>{posting.display_quantity()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="cta-button cta-secondary row-btn"
                                            on:click=move |_| on_edit.run(edit_posting.clone())
                                        >
                                            "Update"
                                        </button>
                                        <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| on_delete.run(id.clone())) />
                                    </td>
                                </tr>
                            }.into_any()
                        }
                    }).collect_view()
                }}
            </tbody>
        </table>
    }
}
