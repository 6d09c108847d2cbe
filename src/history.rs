//! History Table Model
//!
//! Turns the per-day history payload into table rows.

use crate::api::query_string;
use crate::models::{DayBucket, DayOutcome, HistoryTableData};

/// Claim rows shown under each count row
pub const CLAIM_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Error,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Success => "success",
            StatusFilter::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "success" => StatusFilter::Success,
            "error" => StatusFilter::Error,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// "YYYY-MM-DD" or empty
    pub start_date: String,
    pub end_date: String,
    pub status: StatusFilter,
}

impl HistoryFilter {
    /// Query shared by the table fetch and the Excel export
    pub fn query(&self) -> String {
        let status = match self.status {
            StatusFilter::All => "",
            other => other.as_str(),
        };
        query_string(&[
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            ("status_filter", status),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    SuccessCount,
    SuccessClaims,
    ErrorCount,
    ErrorClaims,
}

impl RowKind {
    pub fn class(&self) -> &'static str {
        match self {
            RowKind::SuccessCount => "success-count-row",
            RowKind::SuccessClaims => "success-claims-row",
            RowKind::ErrorCount => "error-count-row",
            RowKind::ErrorClaims => "error-claims-row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub kind: RowKind,
    pub label: &'static str,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryTable {
    pub dates: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl HistoryTable {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

fn bucket_rows(
    data: &HistoryTableData,
    pick: impl Fn(&DayOutcome) -> Option<&DayBucket>,
    count_kind: RowKind,
    claims_kind: RowKind,
    label: &'static str,
) -> Vec<TableRow> {
    let empty = DayBucket::default();
    let buckets: Vec<&DayBucket> = data
        .date_range
        .iter()
        .map(|date| data.table_data.get(date).and_then(&pick).unwrap_or(&empty))
        .collect();

    let mut rows = vec![TableRow {
        kind: count_kind,
        label,
        cells: buckets.iter().map(|b| b.count.to_string()).collect(),
    }];
    for i in 0..CLAIM_ROWS {
        rows.push(TableRow {
            kind: claims_kind,
            label: "",
            cells: buckets.iter().map(|b| b.claims.get(i).cloned().unwrap_or_default()).collect(),
        });
    }
    rows
}

pub fn build_table(data: &HistoryTableData, filter: StatusFilter) -> HistoryTable {
    if data.date_range.is_empty() {
        return HistoryTable::default();
    }

    let mut rows = Vec::new();
    if matches!(filter, StatusFilter::All | StatusFilter::Success) {
        rows.extend(bucket_rows(data, |d| d.success.as_ref(), RowKind::SuccessCount, RowKind::SuccessClaims, "Успешно"));
    }
    if matches!(filter, StatusFilter::All | StatusFilter::Error) {
        rows.extend(bucket_rows(data, |d| d.error.as_ref(), RowKind::ErrorCount, RowKind::ErrorClaims, "Сбой"));
    }

    HistoryTable { dates: data.date_range.clone(), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HistoryTableData {
        let mut data = HistoryTableData {
            date_range: vec!["2024-05-01".into(), "2024-05-02".into()],
            ..Default::default()
        };
        data.table_data.insert(
            "2024-05-01".into(),
            DayOutcome {
                success: Some(DayBucket { count: 2, claims: vec!["A-1".into(), "A-2".into()] }),
                error: None,
            },
        );
        data
    }

    #[test]
    fn test_all_filter_builds_both_sections() {
        let table = build_table(&sample(), StatusFilter::All);
        assert_eq!(table.rows.len(), 2 * (1 + CLAIM_ROWS));
        assert_eq!(table.rows[0].cells, vec!["2", "0"]);
        assert_eq!(table.rows[1].cells, vec!["A-1", ""]);
        assert_eq!(table.rows[3].cells, vec!["", ""]);
        assert_eq!(table.rows[4].kind, RowKind::ErrorCount);
        assert_eq!(table.rows[4].cells, vec!["0", "0"]);
    }

    #[test]
    fn test_error_filter_hides_success() {
        let table = build_table(&sample(), StatusFilter::Error);
        assert!(table.rows.iter().all(|r| matches!(r.kind, RowKind::ErrorCount | RowKind::ErrorClaims)));
    }

    #[test]
    fn test_empty_range_is_empty_table() {
        assert!(build_table(&HistoryTableData::default(), StatusFilter::All).is_empty());
    }

    #[test]
    fn test_filter_query() {
        let filter = HistoryFilter { start_date: "2024-05-01".into(), end_date: String::new(), status: StatusFilter::All };
        assert_eq!(filter.query(), "?start_date=2024-05-01");
        let filter = HistoryFilter { status: StatusFilter::Error, ..Default::default() };
        assert_eq!(filter.query(), "?status_filter=error");
    }
}
