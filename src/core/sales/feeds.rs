// Upstream feed record types and the pure join over them.
//
// Purpose
// - Describe the read contract with the transactional store: rentals,
//   payments, and customers, joined on their natural keys.
//
// Responsibilities
// - Emit one joined sale candidate per matched (rental, payment) pair.
// - Exclude rentals with no matching payment or customer (inner join).
// - Derive the customer display name from first and last name.
//
// Boundaries
// - No input or output. The candidate still carries the raw, possibly
//   missing rental date; validation happens when a detail row is built.

use chrono::NaiveDateTime;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RentalRecord {
    pub rental_id: i64,
    pub rental_date: Option<NaiveDateTime>,
    pub return_date: Option<NaiveDateTime>,
    pub customer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaymentRecord {
    pub rental_id: i64,
    pub amount_minor: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CustomerRecord {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedSale {
    pub rental_id: i64,
    pub rental_date: Option<NaiveDateTime>,
    pub return_date: Option<NaiveDateTime>,
    pub customer_id: i64,
    pub customer_name: String,
    pub amount_minor: i64,
}

pub fn join_feeds(
    rentals: &[RentalRecord],
    payments: &[PaymentRecord],
    customers: &[CustomerRecord],
) -> Vec<JoinedSale> {
    let customers_by_id: HashMap<i64, &CustomerRecord> = customers
        .iter()
        .map(|customer| (customer.customer_id, customer))
        .collect();

    let mut payments_by_rental: HashMap<i64, Vec<&PaymentRecord>> = HashMap::new();
    for payment in payments {
        payments_by_rental
            .entry(payment.rental_id)
            .or_default()
            .push(payment);
    }

    let mut joined = Vec::new();
    for rental in rentals {
        let Some(customer) = customers_by_id.get(&rental.customer_id) else {
            continue;
        };
        let Some(rental_payments) = payments_by_rental.get(&rental.rental_id) else {
            continue;
        };
        for payment in rental_payments {
            joined.push(JoinedSale {
                rental_id: rental.rental_id,
                rental_date: rental.rental_date,
                return_date: rental.return_date,
                customer_id: rental.customer_id,
                customer_name: format!("{} {}", customer.first_name, customer.last_name),
                amount_minor: payment.amount_minor,
            });
        }
    }
    joined
}
