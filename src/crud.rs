//! CRUD Controller
//!
//! Turns form input into create/update/delete calls and refetches the
//! affected list afterwards. Components own the editing ids and forms; this
//! module only decides what to send and what to reload.

use crate::api::{self, Backend};
use crate::error::{ApiError, ApiResult};
use crate::models::{HistoryEntry, HistoryPayload, ItemPayload, Posting};
use crate::numeric::{leading_integer, leading_number};

/// Raw item modal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub username: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl ItemForm {
    /// Prefill from an existing listing (update mode)
    pub fn from_posting(posting: &Posting) -> Self {
        Self {
            username: String::new(),
            name: posting.name.clone().unwrap_or_default(),
            price: posting.price.map(|p| p.to_string()).unwrap_or_default(),
            quantity: posting.quantity.map(|q| q.to_string()).unwrap_or_default(),
        }
    }

    pub fn to_payload(&self, editing_id: Option<String>) -> ApiResult<ItemPayload> {
        let username = self.username.trim();
        Ok(ItemPayload {
            username: (!username.is_empty()).then(|| username.to_string()),
            item_name: required_text(&self.name, "Item name")?,
            item_price: parse_price(&self.price)?,
            item_quantity: parse_count(&self.quantity, "Quantity")?,
            item_id: editing_id,
        })
    }
}

/// Raw sale modal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryForm {
    pub buyer: String,
    pub item_name: String,
    pub price: String,
    pub amount: String,
}

impl HistoryForm {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            buyer: entry.buyer.clone().unwrap_or_default(),
            item_name: entry.item_name.clone().unwrap_or_default(),
            price: entry.price.map(|p| p.to_string()).unwrap_or_default(),
            amount: entry.amount_sold.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    pub fn to_payload(&self, editing_id: Option<String>) -> ApiResult<HistoryPayload> {
        Ok(HistoryPayload {
            buyer: required_text(&self.buyer, "Buyer")?,
            item_name: required_text(&self.item_name, "Item name")?,
            item_price: parse_price(&self.price)?,
            amount_sold: parse_count(&self.amount, "Amount sold")?,
            entry_id: editing_id,
        })
    }
}

fn required_text(value: &str, field: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn parse_price(value: &str) -> ApiResult<f64> {
    leading_number(value)
        .filter(|p| p.is_finite())
        .ok_or_else(|| ApiError::InvalidInput("Price must be a number".to_string()))
}

fn parse_count(value: &str, field: &str) -> ApiResult<i64> {
    leading_integer(value).ok_or_else(|| ApiError::InvalidInput(format!("{} must be a whole number", field)))
}

/// What a successful mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
}

impl Mutation {
    fn from_editing(editing_id: &Option<String>) -> Self {
        if editing_id.is_some() { Mutation::Updated } else { Mutation::Created }
    }

    /// Alert text after an item save; deletions refresh without one
    pub fn item_message(self) -> Option<&'static str> {
        match self {
            Mutation::Created => Some("Item added!"),
            Mutation::Updated => Some("Item updated!"),
            Mutation::Deleted => None,
        }
    }

    pub fn entry_message(self) -> Option<&'static str> {
        match self {
            Mutation::Created => Some("Entry added!"),
            Mutation::Updated => Some("Entry updated!"),
            Mutation::Deleted => None,
        }
    }
}

/// A mutation the server accepted, plus the reloaded list
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub mutation: Mutation,
    pub rows: ApiResult<Vec<T>>,
}

/// Create or update a listing, then reload listings matching `search`
pub async fn submit_item<B: Backend>(
    backend: &B,
    editing_id: Option<String>,
    form: &ItemForm,
    search: &str,
) -> ApiResult<Applied<Posting>> {
    let mutation = Mutation::from_editing(&editing_id);
    let payload = form.to_payload(editing_id)?;
    api::save_item(backend, &payload).await?;
    log::info!("[Crud] item {:?} via {}", mutation, api::item_save_endpoint(&payload));
    let rows = api::list_postings(backend, search).await;
    Ok(Applied { mutation, rows })
}

pub async fn remove_item<B: Backend>(backend: &B, item_id: &str, search: &str) -> ApiResult<Applied<Posting>> {
    api::delete_item(backend, item_id).await?;
    log::info!("[Crud] item {} deleted", item_id);
    let rows = api::list_postings(backend, search).await;
    Ok(Applied { mutation: Mutation::Deleted, rows })
}

/// Create or update a sale record, then reload the history
pub async fn submit_history<B: Backend>(
    backend: &B,
    editing_id: Option<String>,
    form: &HistoryForm,
) -> ApiResult<Applied<HistoryEntry>> {
    let mutation = Mutation::from_editing(&editing_id);
    let payload = form.to_payload(editing_id)?;
    api::save_history_entry(backend, &payload).await?;
    log::info!("[Crud] entry {:?} via {}", mutation, api::history_save_endpoint(&payload));
    let rows = api::list_history(backend).await;
    Ok(Applied { mutation, rows })
}

pub async fn remove_history<B: Backend>(backend: &B, entry_id: &str) -> ApiResult<Applied<HistoryEntry>> {
    api::delete_history_entry(backend, entry_id).await?;
    log::info!("[Crud] entry {} deleted", entry_id);
    let rows = api::list_history(backend).await;
    Ok(Applied { mutation: Mutation::Deleted, rows })
}
