//! Price Stats Table Component
//!
//! Highest/lowest/average price per item with click-to-sort headers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::PlaceholderRow;
use crate::context::use_app_context;
use crate::sort::{sort_rows, ColumnToggles};
use crate::table::{price_stats_cells, RenderedRow, TableBody, PRICE_STATS_HEADERS};

const COLUMNS: u32 = PRICE_STATS_HEADERS.len() as u32;

#[component]
pub fn PriceStatsTable() -> impl IntoView {
    let ctx = use_app_context();
    let (body, set_body) = signal(TableBody::<Vec<String>>::Loading);
    let toggles = StoredValue::new(ColumnToggles::new(PRICE_STATS_HEADERS.len()));

    Effect::new(move |_| {
        let backend = ctx.backend();
        spawn_local(async move {
            let result = api::price_stats(&backend).await;
            if let Ok(stats) = &result {
                ctx.set_item_names(stats.iter().map(|s| s.item.clone()).collect());
            }
            set_body.set(TableBody::from_result(result).map_rows(|s| price_stats_cells(&s)));
        });
    });

    let sort_by = move |column: usize| {
        let mut ascending = true;
        toggles.update_value(|t| ascending = t.click(column));
        set_body.update(|b| {
            if let Some(rows) = b.rows_mut() {
                sort_rows(rows, column, ascending);
            }
        });
    };

    view! {
        <div class="table-card">
            <h2>"Item Price Statistics"</h2>
            <table id="item-stats-table" class="stats-table">
                <thead>
                    <tr>
                        {PRICE_STATS_HEADERS.iter().enumerate().map(|(column, header)| view! {
                            <th class="sortable" on:click=move |_| sort_by(column)>{*header}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || body.with(|b| b.rendered().into_iter().map(|row| match row {
                        RenderedRow::Placeholder(text) => view! {
                            <PlaceholderRow colspan=COLUMNS text=text />
                        }.into_any(),
                        RenderedRow::Record(cells) => {
                            let cells = cells.clone();
                            view! {
                                <tr>{cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                            }.into_any()
                        }
                    }).collect_view())}
                </tbody>
            </table>
        </div>
    }
}
