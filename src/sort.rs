//! Table Sorting
//!
//! Header-click sorting for rendered table rows.

use std::cmp::{Ordering, Reverse};

use crate::models::HistoryEntry;
use crate::numeric::cell_number;

/// Compare two cells: numerically when both parse, otherwise as text
/// ignoring case (exact text breaks ties)
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    match (cell_number(a), cell_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

/// Stable sort of rows by one column; rows missing the column sort as empty text
pub fn sort_rows(rows: &mut [Vec<String>], column: usize, ascending: bool) {
    rows.sort_by(|a, b| {
        let left = a.get(column).map(String::as_str).unwrap_or("");
        let right = b.get(column).map(String::as_str).unwrap_or("");
        let ord = compare_cells(left, right);
        if ascending { ord } else { ord.reverse() }
    });
}

/// Per-header sort direction; each header flips independently
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnToggles {
    ascending: Vec<bool>,
}

impl ColumnToggles {
    pub fn new(columns: usize) -> Self {
        Self { ascending: vec![true; columns] }
    }

    /// Direction to apply for this click; the header flips for the next one
    pub fn click(&mut self, column: usize) -> bool {
        if column >= self.ascending.len() {
            self.ascending.resize(column + 1, true);
        }
        let current = self.ascending[column];
        self.ascending[column] = !current;
        current
    }
}

/// Order sale records by timestamp; equal times keep their current order
pub fn sort_history_by_time(entries: &mut [HistoryEntry], newest_first: bool) {
    if newest_first {
        entries.sort_by_key(|e| Reverse(e.timestamp_millis()));
    } else {
        entries.sort_by_key(|e| e.timestamp_millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["Banana".to_string(), "2".to_string()],
            vec!["Apple".to_string(), "10".to_string()],
        ]
    }

    #[test]
    fn test_numeric_column_sorts_by_value() {
        let mut r = rows();
        sort_rows(&mut r, 1, true);
        assert_eq!(r[0][1], "2");
        assert_eq!(r[1][1], "10");

        sort_rows(&mut r, 1, false);
        assert_eq!(r[0][1], "10");
    }

    #[test]
    fn test_text_column_sorts_lexicographically() {
        let mut r = rows();
        sort_rows(&mut r, 0, true);
        assert_eq!(r[0][0], "Apple");
        sort_rows(&mut r, 0, false);
        assert_eq!(r[0][0], "Banana");
    }

    #[test]
    fn test_text_ignores_case() {
        let mut r = vec![vec!["Banana".to_string()], vec!["apple".to_string()], vec!["cherry".to_string()]];
        sort_rows(&mut r, 0, true);
        let order: Vec<&str> = r.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(order, vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_formatted_amounts_and_placeholders() {
        assert_eq!(compare_cells("1,234.50", "999.00"), Ordering::Greater);
        // "-" never parses, so it falls back to text ordering
        assert_eq!(compare_cells("-", "5.00"), Ordering::Less);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut r = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "1".to_string()],
            vec!["c".to_string(), "0".to_string()],
        ];
        sort_rows(&mut r, 1, true);
        let order: Vec<&str> = r.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_toggles_are_per_column() {
        let mut toggles = ColumnToggles::new(3);
        assert!(toggles.click(0));
        assert!(!toggles.click(0));
        assert!(toggles.click(1));
        assert!(toggles.click(0));
        assert!(!toggles.click(1));
        assert!(toggles.click(7));
    }

    #[test]
    fn test_history_time_order() {
        let entry = |id: &str, ts: &str| HistoryEntry {
            id: id.to_string(),
            buyer: None,
            item_name: None,
            price: None,
            amount_sold: None,
            timestamp: Some(ts.to_string()),
        };
        let mut entries = vec![
            entry("mid", "2024-02-01T00:00:00"),
            entry("old", "2024-01-01T00:00:00"),
            entry("new", "2024-03-01T00:00:00"),
        ];
        sort_history_by_time(&mut entries, true);
        assert_eq!(entries[0].id, "new");
        sort_history_by_time(&mut entries, false);
        assert_eq!(entries[0].id, "old");
        assert_eq!(entries[2].id, "new");
    }

    #[test]
    fn test_history_same_time_keeps_insertion_order() {
        let entry = |id: &str| HistoryEntry {
            id: id.to_string(),
            buyer: None,
            item_name: None,
            price: None,
            amount_sold: None,
            timestamp: Some("2024-05-05T12:00:00".to_string()),
        };
        let mut entries = vec![entry("first"), entry("second")];
        sort_history_by_time(&mut entries, true);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        sort_history_by_time(&mut entries, false);
        assert_eq!(entries[0].id, "first");
    }
}
