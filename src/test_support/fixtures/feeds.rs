// Shared test fixtures for feed records, joined candidates, and detail rows.
//
// The sample feed set is small but covers the join edge cases: a rental with
// two payments, a rental with no payment, a rental with an unknown customer,
// and a rental with a missing rental date.

use crate::core::sales::detail::SaleDetailRow;
use crate::core::sales::feeds::{CustomerRecord, JoinedSale, PaymentRecord, RentalRecord};
use chrono::NaiveDateTime;

pub fn parse_at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn make_rental(rental_id: i64, rental_date: Option<&str>, customer_id: i64) -> RentalRecord {
    RentalRecord {
        rental_id,
        rental_date: rental_date.map(parse_at),
        return_date: None,
        customer_id,
    }
}

pub fn make_payment(rental_id: i64, amount_minor: i64) -> PaymentRecord {
    PaymentRecord {
        rental_id,
        amount_minor,
    }
}

pub fn make_customer(customer_id: i64, first_name: &str, last_name: &str) -> CustomerRecord {
    CustomerRecord {
        customer_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

pub fn make_detail_row(rental_id: i64, rental_date: &str, amount_minor: i64) -> SaleDetailRow {
    SaleDetailRow {
        rental_id,
        rental_date: parse_at(rental_date),
        return_date: None,
        customer_id: 7,
        customer_name: "Mary Smith".to_string(),
        amount_minor,
    }
}

pub fn make_sample_feeds() -> (Vec<RentalRecord>, Vec<PaymentRecord>, Vec<CustomerRecord>) {
    let rentals = vec![
        make_rental(1, Some("2008-06-12 10:30:00"), 7),
        make_rental(2, Some("2008-06-20 18:00:00"), 8),
        make_rental(3, Some("2008-07-02 09:15:00"), 7),
        // Missing rental date: joined, then rejected at ingest time.
        make_rental(4, None, 9),
        // No payment for this one.
        make_rental(5, Some("2008-07-10 14:00:00"), 8),
        // Customer 99 does not exist.
        make_rental(6, Some("2008-08-01 11:00:00"), 99),
    ];
    let payments = vec![
        make_payment(1, 1099),
        make_payment(1, 250),
        make_payment(2, 500),
        make_payment(3, 799),
        make_payment(4, 299),
        make_payment(6, 450),
    ];
    let customers = vec![
        make_customer(7, "Mary", "Smith"),
        make_customer(8, "John", "Doe"),
        make_customer(9, "Jane", "Brown"),
    ];
    (rentals, payments, customers)
}

pub struct JoinedSaleBuilder {
    inner: JoinedSale,
}

impl Default for JoinedSaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl JoinedSaleBuilder {
    pub fn new() -> Self {
        Self {
            inner: JoinedSale {
                rental_id: 1,
                rental_date: Some(parse_at("2008-06-12 10:30:00")),
                return_date: Some(parse_at("2008-06-15 10:00:00")),
                customer_id: 7,
                customer_name: "Mary Smith".to_string(),
                amount_minor: 1099,
            },
        }
    }

    pub fn rental_id(mut self, v: i64) -> Self {
        self.inner.rental_id = v;
        self
    }

    pub fn rental_date(mut self, v: &str) -> Self {
        self.inner.rental_date = Some(parse_at(v));
        self
    }

    pub fn no_rental_date(mut self) -> Self {
        self.inner.rental_date = None;
        self
    }

    pub fn no_return_date(mut self) -> Self {
        self.inner.return_date = None;
        self
    }

    pub fn customer(mut self, customer_id: i64, customer_name: &str) -> Self {
        self.inner.customer_id = customer_id;
        self.inner.customer_name = customer_name.to_string();
        self
    }

    pub fn amount_minor(mut self, v: i64) -> Self {
        self.inner.amount_minor = v;
        self
    }

    pub fn build(self) -> JoinedSale {
        self.inner
    }
}
