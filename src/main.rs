use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use sales_summary::adapters::in_memory::in_memory_detail_store::InMemoryDetailStore;
use sales_summary::adapters::in_memory::in_memory_feeds::InMemoryFeeds;
use sales_summary::adapters::in_memory::in_memory_summary_store::InMemorySummaryStore;
use sales_summary::application::ingest::ingester::DetailIngester;
use sales_summary::application::refresh::orchestrator::RefreshOrchestrator;
use sales_summary::application::refresh::trigger::MaintenanceTrigger;
use sales_summary::application::summary::incremental::IncrementalAggregator;
use sales_summary::application::summary::rebuild::SummaryRebuilder;
use sales_summary::application::summary::repository::MonthSummaryRepository;
use sales_summary::core::sales::feeds::{CustomerRecord, JoinedSale, PaymentRecord, RentalRecord};
use chrono::NaiveDateTime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory deps for now
    let feeds = Arc::new(demo_feeds());
    let detail_store = Arc::new(InMemoryDetailStore::new());
    let summary_store = Arc::new(InMemorySummaryStore::new());
    let trigger = Arc::new(MaintenanceTrigger::new());

    let ingester = Arc::new(DetailIngester::new(
        feeds,
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
        rebuilder,
        detail_store.clone(),
        summary_store.clone(),
        trigger,
    );

    let report = orchestrator.refresh().await?;
    tracing::info!(
        detail_rows = report.detail_rows,
        summary_buckets = report.summary_buckets,
        "initial load done"
    );

    // A sale arriving after the load flows through the incremental path.
    let late_sale = JoinedSale {
        rental_id: 7,
        rental_date: Some(at("2008-08-02 16:20:00")),
        return_date: None,
        customer_id: 2,
        customer_name: "John Doe".to_string(),
        amount_minor: 499,
    };
    ingester.insert_detail(late_sale).await?;

    for row in summary_store.list().await? {
        tracing::info!(
            month = %row.month_key,
            revenue_minor = row.total_revenue_minor,
            transactions = row.total_transactions,
            "monthly summary"
        );
    }
    Ok(())
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("demo timestamp")
}

fn demo_feeds() -> InMemoryFeeds {
    let rentals = vec![
        RentalRecord {
            rental_id: 1,
            rental_date: Some(at("2008-06-12 10:30:00")),
            return_date: Some(at("2008-06-15 09:00:00")),
            customer_id: 1,
        },
        RentalRecord {
            rental_id: 2,
            rental_date: Some(at("2008-06-20 18:00:00")),
            return_date: None,
            customer_id: 2,
        },
        RentalRecord {
            rental_id: 3,
            rental_date: Some(at("2008-07-02 09:15:00")),
            return_date: Some(at("2008-07-04 12:30:00")),
            customer_id: 1,
        },
        RentalRecord {
            rental_id: 4,
            rental_date: Some(at("2008-07-28 21:45:00")),
            return_date: None,
            customer_id: 2,
        },
    ];
    let payments = vec![
        PaymentRecord {
            rental_id: 1,
            amount_minor: 1099,
        },
        PaymentRecord {
            rental_id: 2,
            amount_minor: 500,
        },
        PaymentRecord {
            rental_id: 3,
            amount_minor: 799,
        },
        PaymentRecord {
            rental_id: 4,
            amount_minor: 299,
        },
    ];
    let customers = vec![
        CustomerRecord {
            customer_id: 1,
            first_name: "Mary".to_string(),
            last_name: "Smith".to_string(),
        },
        CustomerRecord {
            customer_id: 2,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        },
    ];
    InMemoryFeeds::new(rentals, payments, customers)
}
