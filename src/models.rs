//! Frontend Models
//!
//! Wire schemas for the market API and the view types they resolve into.
//! Field-name fallbacks are resolved here, once, so components only ever see
//! the resolved shapes.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ========================
// Postings (items for sale)
// ========================

/// Item listing as returned by `/postings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemName", default)]
    pub name: Option<String>,
    #[serde(rename = "itemPrice", default)]
    pub price: Option<f64>,
    #[serde(rename = "itemQuantity", default)]
    pub quantity: Option<i64>,
}

impl Posting {
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "Unknown Item".to_string())
    }

    pub fn display_price(&self) -> String {
        self.price.map(|p| p.to_string()).unwrap_or_else(|| "N/A".to_string())
    }

    pub fn display_quantity(&self) -> String {
        self.quantity.map(|q| q.to_string()).unwrap_or_else(|| "N/A".to_string())
    }
}

// ========================
// Sales history
// ========================

/// Sale record as returned by `/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userCustomer", default)]
    pub buyer: Option<String>,
    #[serde(rename = "itemName", default)]
    pub item_name: Option<String>,
    #[serde(rename = "itemPrice", default)]
    pub price: Option<f64>,
    #[serde(rename = "amountSold", default)]
    pub amount_sold: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    /// Parsed timestamp; accepts naive ISO-8601 (as the server emits) or RFC 3339
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// Milliseconds since the epoch, 0 when the timestamp is missing or unparseable
    pub fn timestamp_millis(&self) -> i64 {
        self.parsed_time()
            .map(|t| t.and_utc().timestamp_millis())
            .unwrap_or(0)
    }

    pub fn display_time(&self) -> String {
        match self.parsed_time() {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.timestamp.clone().unwrap_or_else(|| "-".to_string()),
        }
    }

    pub fn display_buyer(&self) -> String {
        self.buyer.clone().unwrap_or_else(|| "-".to_string())
    }

    pub fn display_item(&self) -> String {
        self.item_name.clone().unwrap_or_else(|| "-".to_string())
    }

    pub fn display_price(&self) -> String {
        self.price.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
    }

    pub fn display_amount(&self) -> String {
        self.amount_sold.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    }

    /// Case-insensitive match on buyer or item name
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        let contains = |field: &Option<String>| field.as_deref().is_some_and(|f| f.to_lowercase().contains(&q));
        q.is_empty() || contains(&self.buyer) || contains(&self.item_name)
    }
}

// ========================
// Analytics
// ========================

/// One point of `/daily_volume`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    pub date: String,
    pub volume: f64,
}

/// Raw `/item_price_stats` row; several back-end versions name fields differently
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStatsRow {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub item_name: Option<String>,
    pub highest_price: Option<f64>,
    pub highest: Option<f64>,
    pub lowest_price: Option<f64>,
    pub lowest: Option<f64>,
    pub average_price: Option<f64>,
    pub avg: Option<f64>,
    pub total_transactions: Option<u64>,
    pub tx: Option<u64>,
}

/// Resolved price statistics for one item
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub item: String,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub average: Option<f64>,
    pub transactions: u64,
}

impl From<PriceStatsRow> for PriceStats {
    fn from(row: PriceStatsRow) -> Self {
        Self {
            item: row.id.or(row.item_name).unwrap_or_else(|| "Unknown".to_string()),
            highest: row.highest_price.or(row.highest),
            lowest: row.lowest_price.or(row.lowest),
            average: row.average_price.or(row.avg),
            transactions: row.total_transactions.or(row.tx).unwrap_or(0),
        }
    }
}

/// `/demand_stability?item=` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StabilityScore {
    pub item: String,
    pub score: f64,
}

/// `/price_volatility?item=` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolatilityScore {
    pub item: String,
    pub pvi: f64,
}

/// `/demand_stability_max` and `/price_volatility_max` response
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MaxValue {
    pub max: f64,
}

// ========================
// Mutations
// ========================

/// `{success, message?}` returned by every POST endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `/add` and `/update_item`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemPrice")]
    pub item_price: f64,
    #[serde(rename = "itemQuantity")]
    pub item_quantity: i64,
    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

/// Body for `/add_history` and `/update_history`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPayload {
    #[serde(rename = "userCustomer")]
    pub buyer: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemPrice")]
    pub item_price: f64,
    #[serde(rename = "amountSold")]
    pub amount_sold: i64,
    #[serde(rename = "entryID", skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_stats_prefers_long_names() {
        let row: PriceStatsRow = serde_json::from_value(json!({
            "_id": "Iron Ore",
            "highestPrice": 12.0,
            "highest": 99.0,
            "lowest": 3.5,
            "avg": null,
            "totalTransactions": 4
        }))
        .unwrap();
        let stats = PriceStats::from(row);
        assert_eq!(stats.item, "Iron Ore");
        assert_eq!(stats.highest, Some(12.0));
        assert_eq!(stats.lowest, Some(3.5));
        assert_eq!(stats.average, None);
        assert_eq!(stats.transactions, 4);
    }

    #[test]
    fn test_price_stats_short_names_and_defaults() {
        let row: PriceStatsRow = serde_json::from_value(json!({
            "itemName": "Wool",
            "tx": 7
        }))
        .unwrap();
        let stats = PriceStats::from(row);
        assert_eq!(stats.item, "Wool");
        assert_eq!(stats.transactions, 7);

        let stats = PriceStats::from(PriceStatsRow::default());
        assert_eq!(stats.item, "Unknown");
        assert_eq!(stats.transactions, 0);
    }

    #[test]
    fn test_history_timestamp_formats() {
        let mut entry = HistoryEntry {
            id: "1".into(),
            buyer: Some("ana".into()),
            item_name: Some("Rope".into()),
            price: Some(2.0),
            amount_sold: Some(1),
            timestamp: Some("2024-03-01T10:15:30.123456".into()),
        };
        assert_eq!(entry.display_time(), "2024-03-01 10:15:30");
        let naive = entry.timestamp_millis();

        entry.timestamp = Some("2024-03-01T10:15:31Z".into());
        assert!(entry.timestamp_millis() > naive);

        entry.timestamp = Some("yesterday".into());
        assert_eq!(entry.timestamp_millis(), 0);
        assert_eq!(entry.display_time(), "yesterday");
    }

    #[test]
    fn test_history_matches_buyer_or_item() {
        let entry = HistoryEntry {
            id: "1".into(),
            buyer: Some("Marta".into()),
            item_name: Some("Copper Wire".into()),
            price: Some(2.0),
            amount_sold: Some(1),
            timestamp: None,
        };
        assert!(entry.matches("mar"));
        assert!(entry.matches("WIRE"));
        assert!(entry.matches(""));
        assert!(!entry.matches("steel"));
    }

    #[test]
    fn test_history_null_fields_render_as_dash() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "_id": "h2",
            "userCustomer": null,
            "itemName": "Rope",
            "itemPrice": null,
            "timestamp": null
        }))
        .unwrap();
        assert_eq!(entry.display_buyer(), "-");
        assert_eq!(entry.display_item(), "Rope");
        assert_eq!(entry.display_price(), "-");
        assert_eq!(entry.display_amount(), "-");
        assert_eq!(entry.display_time(), "-");
        assert!(entry.matches("rope"));
        assert!(!entry.matches("ana"));
    }

    #[test]
    fn test_update_payload_carries_id() {
        let payload = ItemPayload {
            username: None,
            item_name: "Rope".into(),
            item_price: 2.5,
            item_quantity: 3,
            item_id: Some("abc".into()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"itemName": "Rope", "itemPrice": 2.5, "itemQuantity": 3, "itemID": "abc"}));
    }
}
