//! Market Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiResult;
use crate::models::{HistoryEntry, Posting};
use crate::sort::sort_history_by_time;
use crate::table::TableBody;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardTab {
    #[default]
    Items,
    History,
}

impl BoardTab {
    pub const ALL: [BoardTab; 2] = [BoardTab::Items, BoardTab::History];

    pub fn label(self) -> &'static str {
        match self {
            BoardTab::Items => "Items",
            BoardTab::History => "History",
        }
    }
}

/// Market board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tab currently shown
    pub active_tab: BoardTab,
    /// Search box text (server-side filter for items, client-side for history)
    pub search: String,
    /// Listings for the items tab
    pub postings: TableBody<Posting>,
    /// Sales for the history tab, in display order
    pub history: TableBody<HistoryEntry>,
    /// Direction the next "sort by time" click applies
    pub history_newest_first: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            history_newest_first: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the listings with a fetch result
pub fn store_set_postings(store: BoardStore, result: ApiResult<Vec<Posting>>) {
    *store.postings().write() = TableBody::from_result(result);
}

/// Replace the sales history with a fetch result (insertion order)
pub fn store_set_history(store: BoardStore, result: ApiResult<Vec<HistoryEntry>>) {
    *store.history().write() = TableBody::from_result(result);
}

/// Sort history by time, then flip the direction for the next click
pub fn store_sort_history(store: BoardStore) {
    let newest_first = store.history_newest_first().get_untracked();
    if let Some(rows) = store.history().write().rows_mut() {
        sort_history_by_time(rows, newest_first);
    }
    *store.history_newest_first().write() = !newest_first;
}

/// Rows of the history tab that match the search box
pub fn visible_history(entries: &[HistoryEntry], search: &str) -> Vec<HistoryEntry> {
    entries.iter().filter(|e| e.matches(search)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_sorts_newest_first() {
        let state = BoardState::new();
        assert!(state.history_newest_first);
        assert_eq!(state.active_tab, BoardTab::Items);
        assert_eq!(state.postings, TableBody::Loading);
    }

    #[test]
    fn test_visible_history_filters() {
        let entry = |buyer: &str, item: &str| HistoryEntry {
            id: buyer.to_string(),
            buyer: Some(buyer.to_string()),
            item_name: Some(item.to_string()),
            price: Some(1.0),
            amount_sold: Some(1),
            timestamp: None,
        };
        let entries = vec![entry("ana", "Rope"), entry("bo", "Iron"), entry("cy", "rope ladder")];
        let visible = visible_history(&entries, "ROPE");
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ana", "cy"]);
        assert_eq!(visible_history(&entries, "").len(), 3);
    }
}
