// Repository trait for summary persistence.
//
// Purpose
// - MonthSummaryRepository: apply per-sale increments and whole-table
//   replacements to the keyed summary rows.
//
// Contract
// - apply_sale is one atomic insert-or-update on the bucket for the key:
//   increment the totals when the bucket exists, create it with count 1 when
//   it does not. Backends that race on bucket creation report Conflict and
//   the caller retries.
// - list returns rows in ascending month key order.

use crate::core::sales::summary::MonthSummaryRow;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryStoreError {
    #[error("concurrent update conflict on bucket {month_key}")]
    Conflict { month_key: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait MonthSummaryRepository: Send + Sync {
    async fn apply_sale(&self, month_key: &str, amount_minor: i64) -> Result<(), SummaryStoreError>;
    async fn replace_all(&self, rows: Vec<MonthSummaryRow>) -> Result<(), SummaryStoreError>;
    async fn list(&self) -> Result<Vec<MonthSummaryRow>, SummaryStoreError>;
    async fn clear(&self) -> Result<(), SummaryStoreError>;
}
