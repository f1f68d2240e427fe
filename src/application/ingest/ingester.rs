// Detail ingester: turn the upstream feeds into stored sale fact rows.
//
// Purpose
// - Bulk-load the detail store by joining rentals, payments, and customers,
//   and accept single rows arriving as external insert events.
//
// Responsibilities
// - Fire the incremental hook for every appended row while the maintenance
//   trigger is armed; stay silent while it is disarmed so a refresh can
//   rebuild the summary exactly once from the batch path.
// - Skip and log records whose rental date is missing; a bad record must not
//   abort the batch.
// - Reject single inserts during the suspension window instead of dropping
//   or double-applying them.
//
// Idempotency
// - Re-running ingest_detail without clearing the detail store first appends
//   duplicates. The refresh orchestrator clears state before reloading.

use crate::application::errors::ApplicationError;
use crate::application::refresh::trigger::MaintenanceTrigger;
use crate::application::summary::incremental::IncrementalAggregator;
use crate::application::summary::repository::MonthSummaryRepository;
use crate::core::ports::{DetailStore, FeedSource};
use crate::core::sales::detail::SaleDetailRow;
use crate::core::sales::feeds::{self, JoinedSale};
use std::sync::Arc;

pub struct DetailIngester<TFeedSource, TDetailStore, TRepository>
where
    TFeedSource: FeedSource,
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    feeds: Arc<TFeedSource>,
    detail_store: Arc<TDetailStore>,
    aggregator: IncrementalAggregator<TRepository>,
    trigger: Arc<MaintenanceTrigger>,
}

impl<TFeedSource, TDetailStore, TRepository>
    DetailIngester<TFeedSource, TDetailStore, TRepository>
where
    TFeedSource: FeedSource,
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    pub fn new(
        feeds: Arc<TFeedSource>,
        detail_store: Arc<TDetailStore>,
        aggregator: IncrementalAggregator<TRepository>,
        trigger: Arc<MaintenanceTrigger>,
    ) -> Self {
        Self {
            feeds,
            detail_store,
            aggregator,
            trigger,
        }
    }

    pub async fn ingest_detail(&self) -> Result<u64, ApplicationError> {
        let rentals = self.feeds.rentals().await?;
        let payments = self.feeds.payments().await?;
        let customers = self.feeds.customers().await?;

        let mut candidates = feeds::join_feeds(&rentals, &payments, &customers);
        // Initial population lands in rental-date order; cosmetic only.
        candidates.sort_by_key(|candidate| candidate.rental_date);

        let mut appended = 0u64;
        for candidate in candidates {
            let rental_id = candidate.rental_id;
            let row = match SaleDetailRow::from_joined(candidate) {
                Ok(row) => row,
                Err(err) => {
                    tracing::warn!(rental_id, error = %err, "skipping detail record");
                    continue;
                }
            };
            self.append_and_maintain(row).await?;
            appended += 1;
        }
        Ok(appended)
    }

    pub async fn insert_detail(
        &self,
        candidate: JoinedSale,
    ) -> Result<SaleDetailRow, ApplicationError> {
        if !self.trigger.is_armed() {
            return Err(ApplicationError::RefreshInProgress);
        }
        let row = SaleDetailRow::from_joined(candidate)?;
        self.append_and_maintain(row.clone()).await?;
        Ok(row)
    }

    async fn append_and_maintain(&self, row: SaleDetailRow) -> Result<(), ApplicationError> {
        self.detail_store.append(row.clone()).await?;
        if self.trigger.is_armed() {
            self.aggregator.on_detail_inserted(&row).await?;
        }
        Ok(())
    }
}
