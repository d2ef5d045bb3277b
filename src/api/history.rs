//! Sales History Endpoints

use serde::Serialize;

use super::{get_json, post_action, Backend};
use crate::error::ApiResult;
use crate::models::{HistoryEntry, HistoryPayload};

pub const HISTORY: &str = "/history";
pub const ADD_HISTORY: &str = "/add_history";
pub const UPDATE_HISTORY: &str = "/update_history";
pub const DELETE_HISTORY: &str = "/delete_history";

#[derive(Serialize)]
struct DeleteEntryArgs<'a> {
    #[serde(rename = "entryID")]
    entry_id: &'a str,
}

pub async fn list_history<B: Backend>(backend: &B) -> ApiResult<Vec<HistoryEntry>> {
    get_json(backend, HISTORY, &[]).await
}

pub fn history_save_endpoint(payload: &HistoryPayload) -> &'static str {
    if payload.entry_id.is_some() { UPDATE_HISTORY } else { ADD_HISTORY }
}

pub async fn save_history_entry<B: Backend>(backend: &B, payload: &HistoryPayload) -> ApiResult<()> {
    post_action(backend, history_save_endpoint(payload), payload).await
}

pub async fn delete_history_entry<B: Backend>(backend: &B, entry_id: &str) -> ApiResult<()> {
    post_action(backend, DELETE_HISTORY, &DeleteEntryArgs { entry_id }).await
}
