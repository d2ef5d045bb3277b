//! Table Rendering State
//!
//! What a table body shows: a placeholder row while loading, when empty or
//! after a failed load, otherwise one row per record in input order.

use crate::error::ApiResult;
use crate::models::PriceStats;
use crate::numeric::format_optional;

/// Column headers of the price stats table
pub const PRICE_STATS_HEADERS: &[&str] = &["Item", "Highest", "Lowest", "Average", "Transactions"];

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    Loading,
    Empty,
    Failed(String),
    Rows(Vec<R>),
}

impl<R> Default for TableBody<R> {
    fn default() -> Self {
        TableBody::Loading
    }
}

/// One `<tr>` of a rendered body
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedRow<'a, R> {
    Placeholder(String),
    Record(&'a R),
}

impl<R> TableBody<R> {
    pub fn from_result(result: ApiResult<Vec<R>>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => TableBody::Empty,
            Ok(rows) => TableBody::Rows(rows),
            Err(e) => {
                log::error!("[Table] load failed: {}", e);
                TableBody::Failed(e.table_message())
            }
        }
    }

    /// Text for the single placeholder row, if this body shows one
    pub fn placeholder(&self) -> Option<String> {
        match self {
            TableBody::Loading => Some("Loading...".to_string()),
            TableBody::Empty => Some("No data".to_string()),
            TableBody::Failed(msg) => Some(msg.clone()),
            TableBody::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn rows_mut(&mut self) -> Option<&mut Vec<R>> {
        match self {
            TableBody::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    /// Every `<tr>` the body renders, top to bottom
    pub fn rendered(&self) -> Vec<RenderedRow<'_, R>> {
        match self.placeholder() {
            Some(text) => vec![RenderedRow::Placeholder(text)],
            None => self.rows().iter().map(RenderedRow::Record).collect(),
        }
    }

    /// Apply `f` to the records, keeping placeholder states as they are
    pub fn map_rows<T>(self, f: impl FnMut(R) -> T) -> TableBody<T> {
        match self {
            TableBody::Loading => TableBody::Loading,
            TableBody::Empty => TableBody::Empty,
            TableBody::Failed(msg) => TableBody::Failed(msg),
            TableBody::Rows(rows) => TableBody::Rows(rows.into_iter().map(f).collect()),
        }
    }
}

/// Display cells for one price stats row
pub fn price_stats_cells(stats: &PriceStats) -> Vec<String> {
    vec![
        stats.item.clone(),
        format_optional(stats.highest),
        format_optional(stats.lowest),
        format_optional(stats.average),
        stats.transactions.to_string(),
    ]
}
