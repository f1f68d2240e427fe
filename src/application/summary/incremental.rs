// Incremental aggregator: keep the summary in step with every appended detail row.
//
// Purpose
// - Apply exactly one bucket mutation per inserted row, so the summary never
//   needs a recompute outside the refresh window.
//
// Responsibilities
// - Extract the month key for the row and hand the repository one atomic
//   insert-or-update for that bucket.
// - Retry when the repository reports a lost race on bucket creation.

use crate::application::errors::ApplicationError;
use crate::application::summary::repository::{MonthSummaryRepository, SummaryStoreError};
use crate::core::sales::detail::SaleDetailRow;
use crate::core::sales::month_key;
use std::sync::Arc;

const UPSERT_ATTEMPTS: u32 = 3;

pub struct IncrementalAggregator<TRepository>
where
    TRepository: MonthSummaryRepository,
{
    repository: Arc<TRepository>,
}

impl<TRepository> IncrementalAggregator<TRepository>
where
    TRepository: MonthSummaryRepository,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn on_detail_inserted(&self, row: &SaleDetailRow) -> Result<(), ApplicationError> {
        let key = month_key::extract(Some(row.rental_date))?;
        let mut attempt = 1;
        loop {
            match self.repository.apply_sale(&key, row.amount_minor).await {
                Ok(()) => return Ok(()),
                Err(SummaryStoreError::Conflict { month_key }) if attempt < UPSERT_ATTEMPTS => {
                    tracing::warn!(%month_key, attempt, "summary upsert conflicted, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
