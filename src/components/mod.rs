//! UI Components
//!
//! Reusable Leptos components.

mod board_tab_bar;
mod daily_volume_chart;
mod delete_confirm_button;
mod edit_session;
mod history_form_modal;
mod history_table;
mod item_form_modal;
mod market_board;
mod placeholder_row;
mod postings_table;
mod price_stats_table;
mod score_chart;

pub use board_tab_bar::BoardTabBar;
pub use daily_volume_chart::DailyVolumeChart;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_session::EditSession;
pub use history_form_modal::HistoryFormModal;
pub use history_table::HistoryTable;
pub use item_form_modal::ItemFormModal;
pub use market_board::MarketBoard;
pub use placeholder_row::PlaceholderRow;
pub use postings_table::PostingsTable;
pub use price_stats_table::PriceStatsTable;
pub use score_chart::ScoreChart;

/// Blocking browser alert
pub(crate) fn alert(message: &str) {
    let _ = leptos::prelude::window().alert_with_message(message);
}
