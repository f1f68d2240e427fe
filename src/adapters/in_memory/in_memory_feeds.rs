// In memory implementation of the FeedSource port.
//
// Purpose
// - Stand in for the upstream transactional store in tests and local runs.
//
// Responsibilities
// - Serve fixed rental, payment, and customer feeds.

use crate::core::ports::FeedSource;
use crate::core::sales::feeds::{CustomerRecord, PaymentRecord, RentalRecord};

pub struct InMemoryFeeds {
    rentals: Vec<RentalRecord>,
    payments: Vec<PaymentRecord>,
    customers: Vec<CustomerRecord>,
    is_offline: bool,
}

impl InMemoryFeeds {
    pub fn new(
        rentals: Vec<RentalRecord>,
        payments: Vec<PaymentRecord>,
        customers: Vec<CustomerRecord>,
    ) -> Self {
        Self {
            rentals,
            payments,
            customers,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("feed source offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedSource for InMemoryFeeds {
    async fn rentals(&self) -> anyhow::Result<Vec<RentalRecord>> {
        self.ensure_online()?;
        Ok(self.rentals.clone())
    }

    async fn payments(&self) -> anyhow::Result<Vec<PaymentRecord>> {
        self.ensure_online()?;
        Ok(self.payments.clone())
    }

    async fn customers(&self) -> anyhow::Result<Vec<CustomerRecord>> {
        self.ensure_online()?;
        Ok(self.customers.clone())
    }
}

#[cfg(test)]
mod in_memory_feeds_tests {
    use super::*;
    use crate::test_support::fixtures::feeds::make_sample_feeds;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_serve_the_seeded_feeds() {
        let (rentals, payments, customers) = make_sample_feeds();
        let feeds = InMemoryFeeds::new(rentals.clone(), payments.clone(), customers.clone());
        assert_eq!(feeds.rentals().await.unwrap(), rentals);
        assert_eq!(feeds.payments().await.unwrap(), payments);
        assert_eq!(feeds.customers().await.unwrap(), customers);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_source_is_offline() {
        let mut feeds = InMemoryFeeds::new(Vec::new(), Vec::new(), Vec::new());
        feeds.toggle_offline();
        let result = feeds.rentals().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("feed source offline"));
    }
}
