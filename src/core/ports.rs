// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe abstract input and output capabilities as traits (for example:
//   FeedSource, DetailStore).
//
// Responsibilities
// - Keep the core independent of any database by coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use crate::core::sales::detail::SaleDetailRow;
use crate::core::sales::feeds::{CustomerRecord, PaymentRecord, RentalRecord};
use async_trait::async_trait;

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn rentals(&self) -> anyhow::Result<Vec<RentalRecord>>;
    async fn payments(&self) -> anyhow::Result<Vec<PaymentRecord>>;
    async fn customers(&self) -> anyhow::Result<Vec<CustomerRecord>>;
}

#[async_trait]
pub trait DetailStore: Send + Sync {
    async fn append(&self, row: SaleDetailRow) -> anyhow::Result<()>;
    async fn list_all(&self) -> anyhow::Result<Vec<SaleDetailRow>>;
    async fn count(&self) -> anyhow::Result<u64>;
    async fn clear(&self) -> anyhow::Result<()>;
}
