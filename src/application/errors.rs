use crate::application::summary::repository::SummaryStoreError;
use crate::core::sales::month_key::MonthKeyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidInput(#[from] MonthKeyError),

    #[error(transparent)]
    Summary(#[from] SummaryStoreError),

    #[error("refresh already in progress")]
    RefreshInProgress,

    #[error("refresh failed while {stage}: {source}")]
    RefreshFailure {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("unexpected: {0}")]
    Unexpected(#[from] anyhow::Error),
}
