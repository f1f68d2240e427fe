// Denormalized sale fact row: one rental, one of its payments, the paying customer.
//
// Purpose
// - Represent how a matched sale is stored in the detail store.
//
// Responsibilities
// - Validate a joined candidate into a row with a guaranteed rental date.
// - A rental id may repeat across rows when the rental has several payments.

use crate::core::sales::feeds::JoinedSale;
use crate::core::sales::month_key::MonthKeyError;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaleDetailRow {
    pub rental_id: i64,
    pub rental_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    pub customer_id: i64,
    pub customer_name: String,
    pub amount_minor: i64,
}

impl SaleDetailRow {
    pub fn from_joined(candidate: JoinedSale) -> Result<Self, MonthKeyError> {
        let rental_date = candidate.rental_date.ok_or(MonthKeyError::InvalidInput)?;
        Ok(Self {
            rental_id: candidate.rental_id,
            rental_date,
            return_date: candidate.return_date,
            customer_id: candidate.customer_id,
            customer_name: candidate.customer_name,
            amount_minor: candidate.amount_minor,
        })
    }
}
