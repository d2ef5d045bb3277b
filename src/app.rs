//! Market Dashboard App
//!
//! Analytics charts on top, the market board (items/history CRUD) below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{HttpBackend, ScoreKind};
use crate::components::{DailyVolumeChart, MarketBoard, PriceStatsTable, ScoreChart};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let item_names = signal(Vec::<String>::new());

    // Provide context to all children
    provide_context(AppContext::new(HttpBackend::new(config.api_base.clone()), item_names));
    provide_context(Store::new(BoardState::new()));

    log::info!("[App] dashboard mounted, api base = {:?}", config.api_base);

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Market Board"</h1>
            </header>

            <section class="analytics">
                <DailyVolumeChart />
                <PriceStatsTable />
                <div class="score-charts">
                    <ScoreChart kind=ScoreKind::Stability />
                    <ScoreChart kind=ScoreKind::Volatility />
                </div>
            </section>

            <MarketBoard />
        </div>
    }
}
