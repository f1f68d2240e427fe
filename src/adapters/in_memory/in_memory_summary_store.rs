// In memory implementation of the MonthSummaryRepository.
//
// Purpose
// - Exercise both aggregation paths without a database.
//
// Responsibilities
// - Keep one row per month key.
// - Perform apply_sale as a single map entry operation under the write lock,
//   so the create-or-increment decision cannot race with itself.

use crate::application::summary::repository::{MonthSummaryRepository, SummaryStoreError};
use crate::core::sales::summary::MonthSummaryRow;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySummaryStore {
    buckets: RwLock<HashMap<String, MonthSummaryRow>>,
    is_offline: bool,
}

impl InMemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SummaryStoreError> {
        if self.is_offline {
            return Err(SummaryStoreError::Backend(
                "summary store offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MonthSummaryRepository for InMemorySummaryStore {
    async fn apply_sale(&self, month_key: &str, amount_minor: i64) -> Result<(), SummaryStoreError> {
        self.ensure_online()?;
        let mut guard = self.buckets.write().await;
        guard
            .entry(month_key.to_string())
            .and_modify(|bucket| {
                bucket.total_revenue_minor += amount_minor;
                bucket.total_transactions += 1;
            })
            .or_insert_with(|| MonthSummaryRow {
                month_key: month_key.to_string(),
                total_revenue_minor: amount_minor,
                total_transactions: 1,
            });
        Ok(())
    }

    async fn replace_all(&self, rows: Vec<MonthSummaryRow>) -> Result<(), SummaryStoreError> {
        self.ensure_online()?;
        let mut guard = self.buckets.write().await;
        guard.clear();
        for row in rows {
            guard.insert(row.month_key.clone(), row);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<MonthSummaryRow>, SummaryStoreError> {
        self.ensure_online()?;
        let guard = self.buckets.read().await;
        let mut rows: Vec<MonthSummaryRow> = guard.values().cloned().collect();
        rows.sort_by(|a, b| a.month_key.cmp(&b.month_key));
        Ok(rows)
    }

    async fn clear(&self) -> Result<(), SummaryStoreError> {
        self.ensure_online()?;
        self.buckets.write().await.clear();
        Ok(())
    }
}
