// Full rebuild of the summary store from the current detail rows.
//
// Purpose
// - Batch aggregation entry point: recompute every bucket from scratch and
//   replace the summary store contents with the result.

use crate::application::errors::ApplicationError;
use crate::application::summary::repository::MonthSummaryRepository;
use crate::core::ports::DetailStore;
use crate::core::sales::aggregate;
use crate::core::sales::summary::MonthSummaryRow;
use std::sync::Arc;

pub struct SummaryRebuilder<TDetailStore, TRepository>
where
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    detail_store: Arc<TDetailStore>,
    repository: Arc<TRepository>,
}

impl<TDetailStore, TRepository> SummaryRebuilder<TDetailStore, TRepository>
where
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    pub fn new(detail_store: Arc<TDetailStore>, repository: Arc<TRepository>) -> Self {
        Self {
            detail_store,
            repository,
        }
    }

    pub async fn rebuild_summary(&self) -> Result<Vec<MonthSummaryRow>, ApplicationError> {
        let rows = self.detail_store.list_all().await?;
        let summary = aggregate::summarize(&rows)?;
        self.repository.replace_all(summary.clone()).await?;
        Ok(summary)
    }
}
