//! Score Chart Component
//!
//! Per-item demand stability or price volatility, log-scaled against the
//! maximum score across all items.

use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ScoreKind};
use crate::chart;
use crate::context::use_app_context;

#[component]
pub fn ScoreChart(kind: ScoreKind) -> impl IntoView {
    let ctx = use_app_context();
    let canvas_ref = NodeRef::<Canvas>::new();
    let (selected, set_selected) = signal(None::<String>);
    let (max, set_max) = signal(None::<f64>);

    // Normalization maximum, fetched once
    Effect::new(move |_| {
        let backend = ctx.backend();
        spawn_local(async move {
            let value = api::score_max(&backend, kind).await;
            log::debug!("[Chart] {} max = {}", kind.title(), value);
            set_max.set(Some(value));
        });
    });

    // Keep a valid selection as item names arrive
    Effect::new(move |_| {
        let names = ctx.item_names.get();
        let still_listed = selected.get_untracked().is_some_and(|s| names.contains(&s));
        if !still_listed {
            set_selected.set(names.first().cloned());
        }
    });

    // Re-render whenever the selection changes
    Effect::new(move |_| {
        let (Some(item), Some(max), Some(canvas)) = (selected.get(), max.get(), canvas_ref.get()) else {
            return;
        };
        let backend = ctx.backend();
        spawn_local(async move {
            let value = api::score(&backend, kind, &item).await;
            chart::render_on_canvas(canvas, &chart::score_config(kind, &item, value, max));
        });
    });

    view! {
        <div class="chart-card">
            <div class="chart-header">
                <h2>{kind.title()}</h2>
                <select
                    class="item-select"
                    prop:value=move || selected.get().unwrap_or_default()
                    on:change=move |ev| set_selected.set(Some(event_target_value(&ev)))
                >
                    <For
                        each=move || ctx.item_names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            view! { <option value=name.clone()>{name.clone()}</option> }
                        }
                    />
                </select>
            </div>
            <Show when=move || ctx.item_names.get().is_empty()>
                <p class="chart-empty">"No items to score yet"</p>
            </Show>
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
}
