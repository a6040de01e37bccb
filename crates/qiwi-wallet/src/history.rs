//! Payment history queries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WalletError, WalletResult};

/// Largest page the provider serves in one history request
pub const MAX_HISTORY_ROWS: i64 = 50;

/// Default page size
pub const DEFAULT_HISTORY_ROWS: i64 = 10;

/// Which transactions a history query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationFilter {
    /// Incoming payments
    #[default]
    In,
    /// Outgoing payments
    Out,
    /// Everything
    All,
    /// QIWI card operations
    QiwiCard,
}

impl OperationFilter {
    pub const ALL_FILTERS: [OperationFilter; 4] = [
        OperationFilter::In,
        OperationFilter::Out,
        OperationFilter::All,
        OperationFilter::QiwiCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationFilter::In => "IN",
            OperationFilter::Out => "OUT",
            OperationFilter::All => "ALL",
            OperationFilter::QiwiCard => "QIWI_CARD",
        }
    }
}

impl fmt::Display for OperationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationFilter {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_FILTERS
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| {
                WalletError::validation(format!(
                    "operation must be IN, OUT, ALL or QIWI_CARD, got {:?}",
                    s
                ))
            })
    }
}

/// A validated history request
///
/// Only the upper bound on `rows` is checked. Zero or negative values are
/// forwarded and left to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    rows: i64,
    operation: OperationFilter,
}

impl HistoryQuery {
    pub fn new(rows: i64, operation: OperationFilter) -> WalletResult<Self> {
        if rows > MAX_HISTORY_ROWS {
            return Err(WalletError::validation(format!(
                "rows must not exceed {}, got {}",
                MAX_HISTORY_ROWS, rows
            )));
        }
        Ok(Self { rows, operation })
    }

    /// Parse the filter from its wire name, then validate as [`HistoryQuery::new`]
    pub fn parse(rows: i64, operation: &str) -> WalletResult<Self> {
        let operation = operation.parse()?;
        Self::new(rows, operation)
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    pub fn operation(&self) -> OperationFilter {
        self.operation
    }

    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("rows".to_string(), self.rows.to_string()),
            ("operation".to_string(), self.operation.as_str().to_string()),
        ]
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            rows: DEFAULT_HISTORY_ROWS,
            operation: OperationFilter::In,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_filter_parsing() {
        assert_eq!("IN".parse::<OperationFilter>().unwrap(), OperationFilter::In);
        assert_eq!("OUT".parse::<OperationFilter>().unwrap(), OperationFilter::Out);
        assert_eq!("ALL".parse::<OperationFilter>().unwrap(), OperationFilter::All);
        assert_eq!(
            "QIWI_CARD".parse::<OperationFilter>().unwrap(),
            OperationFilter::QiwiCard
        );
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        for bad in ["in", "Out", "ERROR", "", "QIWI CARD"] {
            let err = bad.parse::<OperationFilter>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_filter_serde_names() {
        let json = serde_json::to_string(&OperationFilter::QiwiCard).unwrap();
        assert_eq!(json, "\"QIWI_CARD\"");
    }

    #[test]
    fn test_rows_upper_bound() {
        assert!(HistoryQuery::new(50, OperationFilter::In).is_ok());
        let err = HistoryQuery::new(51, OperationFilter::In).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_rows_lower_bound_passes_through() {
        let query = HistoryQuery::new(0, OperationFilter::All).unwrap();
        assert_eq!(query.rows(), 0);
        let query = HistoryQuery::new(-5, OperationFilter::All).unwrap();
        assert_eq!(query.rows(), -5);
    }

    #[test]
    fn test_default_query() {
        let query = HistoryQuery::default();
        assert_eq!(query.rows(), 10);
        assert_eq!(query.operation(), OperationFilter::In);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("rows".to_string(), "10".to_string()),
                ("operation".to_string(), "IN".to_string()),
            ]
        );
    }
}
