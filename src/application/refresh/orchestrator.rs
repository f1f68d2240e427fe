// Refresh orchestrator: full reload of both stores from the upstream feeds.
//
// Purpose
// - Coordinate suspend, truncate, reload, resummarize, and resume as one
//   exclusive operation.
//
// Responsibilities
// - Disarm the maintenance trigger before touching the stores so the reload
//   cannot double-count, and re-arm it on every exit path before an error
//   surfaces. A failed refresh must leave the system able to refresh again.
// - Report the outcome with a single terminal notice.

use crate::application::errors::ApplicationError;
use crate::application::ingest::ingester::DetailIngester;
use crate::application::refresh::trigger::MaintenanceTrigger;
use crate::application::summary::rebuild::SummaryRebuilder;
use crate::application::summary::repository::MonthSummaryRepository;
use crate::core::ports::{DetailStore, FeedSource};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Suspending,
    Reloading,
    Resummarizing,
    Resuming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub detail_rows: u64,
    pub summary_buckets: usize,
}

pub struct RefreshOrchestrator<TFeedSource, TDetailStore, TRepository>
where
    TFeedSource: FeedSource,
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    ingester: Arc<DetailIngester<TFeedSource, TDetailStore, TRepository>>,
    rebuilder: Arc<SummaryRebuilder<TDetailStore, TRepository>>,
    detail_store: Arc<TDetailStore>,
    summary_store: Arc<TRepository>,
    trigger: Arc<MaintenanceTrigger>,
    state: RwLock<RefreshState>,
}

impl<TFeedSource, TDetailStore, TRepository>
    RefreshOrchestrator<TFeedSource, TDetailStore, TRepository>
where
    TFeedSource: FeedSource,
    TDetailStore: DetailStore,
    TRepository: MonthSummaryRepository,
{
    pub fn new(
        ingester: Arc<DetailIngester<TFeedSource, TDetailStore, TRepository>>,
        rebuilder: Arc<SummaryRebuilder<TDetailStore, TRepository>>,
        detail_store: Arc<TDetailStore>,
        summary_store: Arc<TRepository>,
        trigger: Arc<MaintenanceTrigger>,
    ) -> Self {
        Self {
            ingester,
            rebuilder,
            detail_store,
            summary_store,
            trigger,
            state: RwLock::new(RefreshState::Idle),
        }
    }

    pub async fn state(&self) -> RefreshState {
        *self.state.read().await
    }

    pub async fn refresh(&self) -> Result<RefreshReport, ApplicationError> {
        {
            let mut state = self.state.write().await;
            if *state != RefreshState::Idle {
                return Err(ApplicationError::RefreshInProgress);
            }
            *state = RefreshState::Suspending;
        }
        self.trigger.disarm();

        let outcome = self.reload_and_resummarize().await;

        // Re-arming happens here, on success and on failure alike, before the
        // outcome is surfaced to the caller.
        self.enter(RefreshState::Resuming).await;
        self.trigger.arm();
        self.enter(RefreshState::Idle).await;

        match outcome {
            Ok(report) => {
                tracing::info!(
                    detail_rows = report.detail_rows,
                    summary_buckets = report.summary_buckets,
                    "summary refresh complete"
                );
                Ok(report)
            }
            Err(err) => {
                tracing::error!(error = %err, "summary refresh failed");
                Err(err)
            }
        }
    }

    async fn reload_and_resummarize(&self) -> Result<RefreshReport, ApplicationError> {
        self.enter(RefreshState::Reloading).await;
        self.detail_store
            .clear()
            .await
            .map_err(|err| ApplicationError::RefreshFailure {
                stage: "clearing the detail store",
                source: err,
            })?;
        self.summary_store
            .clear()
            .await
            .map_err(|err| ApplicationError::RefreshFailure {
                stage: "clearing the summary store",
                source: err.into(),
            })?;
        let detail_rows =
            self.ingester
                .ingest_detail()
                .await
                .map_err(|err| ApplicationError::RefreshFailure {
                    stage: "reloading the detail store",
                    source: err.into(),
                })?;

        self.enter(RefreshState::Resummarizing).await;
        let summary =
            self.rebuilder
                .rebuild_summary()
                .await
                .map_err(|err| ApplicationError::RefreshFailure {
                    stage: "rebuilding the summary",
                    source: err.into(),
                })?;

        Ok(RefreshReport {
            detail_rows,
            summary_buckets: summary.len(),
        })
    }

    async fn enter(&self, next: RefreshState) {
        let mut state = self.state.write().await;
        tracing::debug!(stage = ?next, "refresh stage");
        *state = next;
    }
}
