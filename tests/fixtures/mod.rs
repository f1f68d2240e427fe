// Shared fixtures for the in memory flow tests.
//
// - month_feeds(): feeds spanning four months with hand-computable sums.
// - wire_system(): the full in memory wiring used by every flow test.

#![allow(dead_code)]

use chrono::NaiveDateTime;
use std::sync::Arc;

use sales_summary::adapters::in_memory::in_memory_detail_store::InMemoryDetailStore;
use sales_summary::adapters::in_memory::in_memory_feeds::InMemoryFeeds;
use sales_summary::adapters::in_memory::in_memory_summary_store::InMemorySummaryStore;
use sales_summary::application::ingest::ingester::DetailIngester;
use sales_summary::application::refresh::orchestrator::RefreshOrchestrator;
use sales_summary::application::refresh::trigger::MaintenanceTrigger;
use sales_summary::application::summary::incremental::IncrementalAggregator;
use sales_summary::application::summary::rebuild::SummaryRebuilder;
use sales_summary::core::sales::feeds::{
    CustomerRecord, JoinedSale, PaymentRecord, RentalRecord,
};

pub type InMemIngester = DetailIngester<InMemoryFeeds, InMemoryDetailStore, InMemorySummaryStore>;
pub type InMemRebuilder = SummaryRebuilder<InMemoryDetailStore, InMemorySummaryStore>;
pub type InMemOrchestrator =
    RefreshOrchestrator<InMemoryFeeds, InMemoryDetailStore, InMemorySummaryStore>;

pub struct System {
    pub detail_store: Arc<InMemoryDetailStore>,
    pub summary_store: Arc<InMemorySummaryStore>,
    pub trigger: Arc<MaintenanceTrigger>,
    pub ingester: Arc<InMemIngester>,
    pub rebuilder: Arc<InMemRebuilder>,
    pub orchestrator: InMemOrchestrator,
}

pub fn wire_system(feeds: InMemoryFeeds) -> System {
    let detail_store = Arc::new(InMemoryDetailStore::new());
    let summary_store = Arc::new(InMemorySummaryStore::new());
    let trigger = Arc::new(MaintenanceTrigger::new());
    wire_onto(feeds, detail_store, summary_store, trigger)
}

pub fn wire_onto(
    feeds: InMemoryFeeds,
    detail_store: Arc<InMemoryDetailStore>,
    summary_store: Arc<InMemorySummaryStore>,
    trigger: Arc<MaintenanceTrigger>,
) -> System {
    let ingester = Arc::new(DetailIngester::new(
        Arc::new(feeds),
        detail_store.clone(),
        IncrementalAggregator::new(summary_store.clone()),
        trigger.clone(),
    ));
    let rebuilder = Arc::new(SummaryRebuilder::new(
        detail_store.clone(),
        summary_store.clone(),
    ));
    let orchestrator = RefreshOrchestrator::new(
        ingester.clone(),
        rebuilder.clone(),
        detail_store.clone(),
        summary_store.clone(),
        trigger.clone(),
    );
    System {
        detail_store,
        summary_store,
        trigger,
        ingester,
        rebuilder,
        orchestrator,
    }
}

pub fn parse_at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn sale(rental_id: i64, rental_date: &str, amount_minor: i64) -> JoinedSale {
    JoinedSale {
        rental_id,
        rental_date: Some(parse_at(rental_date)),
        return_date: None,
        customer_id: 1,
        customer_name: "Mary Smith".to_string(),
        amount_minor,
    }
}

// June 1599/2, July 799/1, August 449/2, September 1299/1.
pub fn month_feeds() -> InMemoryFeeds {
    let rentals = vec![
        rental(1, "2008-06-12 10:30:00", 1),
        rental(2, "2008-06-20 18:00:00", 2),
        rental(3, "2008-07-02 09:15:00", 1),
        rental(4, "2008-08-05 13:00:00", 2),
        rental(5, "2008-09-18 20:40:00", 1),
    ];
    let payments = vec![
        payment(1, 1099),
        payment(2, 500),
        payment(3, 799),
        payment(4, 299),
        payment(4, 150),
        payment(5, 1299),
    ];
    let customers = vec![customer(1, "Mary", "Smith"), customer(2, "John", "Doe")];
    InMemoryFeeds::new(rentals, payments, customers)
}

pub fn rental(rental_id: i64, rental_date: &str, customer_id: i64) -> RentalRecord {
    RentalRecord {
        rental_id,
        rental_date: Some(parse_at(rental_date)),
        return_date: None,
        customer_id,
    }
}

pub fn payment(rental_id: i64, amount_minor: i64) -> PaymentRecord {
    PaymentRecord {
        rental_id,
        amount_minor,
    }
}

pub fn customer(customer_id: i64, first_name: &str, last_name: &str) -> CustomerRecord {
    CustomerRecord {
        customer_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}
