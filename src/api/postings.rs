//! Posting Endpoints
//!
//! Items currently listed for sale.

use serde::Serialize;

use super::{get_json, post_action, Backend};
use crate::error::ApiResult;
use crate::models::{ItemPayload, Posting};

pub const POSTINGS: &str = "/postings";
pub const ADD_ITEM: &str = "/add";
pub const UPDATE_ITEM: &str = "/update_item";
pub const DELETE_ITEM: &str = "/delete";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct DeleteItemArgs<'a> {
    #[serde(rename = "itemID")]
    item_id: &'a str,
}

// ========================
// Commands
// ========================

/// Listings whose name matches `search` (server-side, case-insensitive)
pub async fn list_postings<B: Backend>(backend: &B, search: &str) -> ApiResult<Vec<Posting>> {
    get_json(backend, POSTINGS, &[("search", search.trim())]).await
}

/// Create or update endpoint, depending on whether the payload names an item
pub fn item_save_endpoint(payload: &ItemPayload) -> &'static str {
    if payload.item_id.is_some() { UPDATE_ITEM } else { ADD_ITEM }
}

pub async fn save_item<B: Backend>(backend: &B, payload: &ItemPayload) -> ApiResult<()> {
    post_action(backend, item_save_endpoint(payload), payload).await
}

pub async fn delete_item<B: Backend>(backend: &B, item_id: &str) -> ApiResult<()> {
    post_action(backend, DELETE_ITEM, &DeleteItemArgs { item_id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Call, RecordingBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_postings_sends_search() {
        let backend = RecordingBackend::new().respond(
            POSTINGS,
            Ok(json!([{"_id": "a1", "itemName": "Rope", "itemPrice": 2.5, "itemQuantity": 4}])),
        );
        let rows = list_postings(&backend, "  rope ").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name(), "Rope");
        assert_eq!(
            backend.calls(),
            vec![Call::Get(POSTINGS.to_string(), vec![("search".to_string(), "rope".to_string())])]
        );
    }

    #[tokio::test]
    async fn test_delete_item_posts_id() {
        let backend = RecordingBackend::new().respond(DELETE_ITEM, Ok(json!({"success": true})));
        delete_item(&backend, "a1").await.unwrap();
        assert_eq!(backend.calls(), vec![Call::Post(DELETE_ITEM.to_string(), json!({"itemID": "a1"}))]);
    }
}
