//! Daily Volume Chart Component
//!
//! Line chart of units sold per day; shows a sample week when the API is down.

use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::chart;
use crate::context::use_app_context;

#[component]
pub fn DailyVolumeChart() -> impl IntoView {
    let ctx = use_app_context();
    let canvas_ref = NodeRef::<Canvas>::new();

    // Runs once the canvas is mounted
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        let backend = ctx.backend();
        spawn_local(async move {
            api::fetch_and_render(&backend, api::DAILY_VOLUME, &[], api::sample_daily_volume(), move |rows| {
                let rows = api::or_sample(rows);
                log::info!("[Chart] daily volume: {} points", rows.len());
                chart::render_on_canvas(canvas, &chart::daily_volume_config(&rows));
            })
            .await;
        });
    });

    view! {
        <div class="chart-card">
            <h2>"Daily Trade Volume"</h2>
            <canvas id="dailyVolumeChart" node_ref=canvas_ref></canvas>
        </div>
    }
}
