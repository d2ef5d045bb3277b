//! Analytics Endpoints
//!
//! Aggregates computed server-side from the sales history.

use serde_json::Value;

use super::{fetch_or, get_json, Backend};
use crate::error::ApiResult;
use crate::models::{DailyVolume, MaxValue, PriceStats, PriceStatsRow, StabilityScore, VolatilityScore};

pub const DAILY_VOLUME: &str = "/daily_volume";
pub const ITEM_PRICE_STATS: &str = "/item_price_stats";

/// Shown when `/daily_volume` is unavailable or empty
pub fn sample_daily_volume() -> Vec<DailyVolume> {
    const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    const VOLUMES: [f64; 7] = [12.0, 19.0, 7.0, 14.0, 9.0, 11.0, 6.0];
    DAYS.iter()
        .zip(VOLUMES)
        .map(|(date, volume)| DailyVolume { date: date.to_string(), volume })
        .collect()
}

/// An empty series is treated like a failed fetch
pub fn or_sample(rows: Vec<DailyVolume>) -> Vec<DailyVolume> {
    if rows.is_empty() { sample_daily_volume() } else { rows }
}

/// Price statistics with field-name fallbacks resolved; a body that is not
/// a list counts as no rows
pub async fn price_stats<B: Backend>(backend: &B) -> ApiResult<Vec<PriceStats>> {
    let value: Value = get_json(backend, ITEM_PRICE_STATS, &[]).await?;
    if !value.is_array() {
        log::warn!("[Api] {} returned a non-list body", ITEM_PRICE_STATS);
        return Ok(Vec::new());
    }
    let rows: Vec<PriceStatsRow> = serde_json::from_value(value)?;
    Ok(rows.into_iter().map(PriceStats::from).collect())
}

/// Per-item scores normalized against a server-side maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Stability,
    Volatility,
}

impl ScoreKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            ScoreKind::Stability => "/demand_stability",
            ScoreKind::Volatility => "/price_volatility",
        }
    }

    pub fn max_endpoint(self) -> &'static str {
        match self {
            ScoreKind::Stability => "/demand_stability_max",
            ScoreKind::Volatility => "/price_volatility_max",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScoreKind::Stability => "Demand Stability",
            ScoreKind::Volatility => "Price Volatility Index",
        }
    }

    pub fn axis_title(self) -> &'static str {
        match self {
            ScoreKind::Stability => "Stability (log-scaled)",
            ScoreKind::Volatility => "PVI (log-scaled)",
        }
    }
}

/// Maximum score across all items; `1` when unavailable
pub async fn score_max<B: Backend>(backend: &B, kind: ScoreKind) -> f64 {
    fetch_or(backend, kind.max_endpoint(), &[], MaxValue { max: 1.0 }).await.max
}

/// Raw score of one item; `0` when unavailable
pub async fn score<B: Backend>(backend: &B, kind: ScoreKind, item: &str) -> f64 {
    let query = [("item", item)];
    match kind {
        ScoreKind::Stability => {
            let fallback = StabilityScore { item: item.to_string(), score: 0.0 };
            fetch_or(backend, kind.endpoint(), &query, fallback).await.score
        }
        ScoreKind::Volatility => {
            let fallback = VolatilityScore { item: item.to_string(), pvi: 0.0 };
            fetch_or(backend, kind.endpoint(), &query, fallback).await.pvi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Call, RecordingBackend};
    use crate::error::ApiError;
    use crate::table::TableBody;
    use serde_json::json;

    #[test]
    fn test_sample_series() {
        let sample = sample_daily_volume();
        assert_eq!(sample.len(), 7);
        assert_eq!(sample[0].date, "Mon");
        assert_eq!(sample[1].volume, 19.0);
        assert_eq!(or_sample(vec![]), sample);
    }

    #[tokio::test]
    async fn test_price_stats_resolves_rows() {
        let backend = RecordingBackend::new()
            .respond(ITEM_PRICE_STATS, Ok(json!([{"_id": "Rope", "highestPrice": 3.0, "tx": 2}])));
        let stats = price_stats(&backend).await.unwrap();
        assert_eq!(stats[0].item, "Rope");
        assert_eq!(stats[0].highest, Some(3.0));
        assert_eq!(stats[0].transactions, 2);
    }

    #[tokio::test]
    async fn test_price_stats_non_list_is_empty() {
        let backend = RecordingBackend::new().respond(ITEM_PRICE_STATS, Ok(json!({})));
        let body = TableBody::from_result(price_stats(&backend).await);
        assert_eq!(body.placeholder().as_deref(), Some("No data"));
    }

    #[tokio::test]
    async fn test_score_max_defaults_to_one() {
        let backend = RecordingBackend::new()
            .respond(ScoreKind::Stability.max_endpoint(), Err(ApiError::Network("down".into())))
            .respond(ScoreKind::Volatility.max_endpoint(), Ok(json!({"max": 42.5})));
        assert_eq!(score_max(&backend, ScoreKind::Stability).await, 1.0);
        assert_eq!(score_max(&backend, ScoreKind::Volatility).await, 42.5);
    }

    #[tokio::test]
    async fn test_score_reads_kind_field() {
        let backend = RecordingBackend::new()
            .respond("/demand_stability", Ok(json!({"item": "Rope", "score": 2.5})))
            .respond("/price_volatility", Ok(json!({"item": "Rope", "pvi": 0.75})));
        assert_eq!(score(&backend, ScoreKind::Stability, "Rope").await, 2.5);
        assert_eq!(score(&backend, ScoreKind::Volatility, "Rope").await, 0.75);
        assert_eq!(
            backend.calls()[0],
            Call::Get("/demand_stability".to_string(), vec![("item".to_string(), "Rope".to_string())])
        );
    }

    #[tokio::test]
    async fn test_score_falls_back_to_zero() {
        let backend = RecordingBackend::new();
        assert_eq!(score(&backend, ScoreKind::Volatility, "Rope").await, 0.0);
    }
}
