// In memory implementation of the DetailStore port.
//
// Purpose
// - Exercise the ingestion and rebuild paths without a database.
//
// Responsibilities
// - Keep appended sale rows in insertion order.
// - Support the bulk truncate the refresh orchestrator relies on.

use crate::core::ports::DetailStore;
use crate::core::sales::detail::SaleDetailRow;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDetailStore {
    rows: RwLock<Vec<SaleDetailRow>>,
    is_offline: bool,
}

impl InMemoryDetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl DetailStore for InMemoryDetailStore {
    async fn append(&self, row: SaleDetailRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("detail store offline"));
        }
        self.rows.write().await.push(row);
        Ok(())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<SaleDetailRow>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("detail store offline"));
        }
        Ok(self.rows.read().await.clone())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        if self.is_offline {
            return Err(anyhow::anyhow!("detail store offline"));
        }
        Ok(self.rows.read().await.len() as u64)
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("detail store offline"));
        }
        self.rows.write().await.clear();
        Ok(())
    }
}
