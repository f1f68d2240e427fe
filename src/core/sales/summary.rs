// Monthly aggregate row: revenue total and transaction count for one month key.
//
// Purpose
// - Represent how one month of sales is stored in the summary store.
//
// Responsibilities
// - Carry the canonical month key as its identity, plus the two running
//   totals both aggregation paths maintain.
//
// Amounts
// - All currency values are fixed point in minor units (cents).

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthSummaryRow {
    pub month_key: String,
    pub total_revenue_minor: i64,
    pub total_transactions: i64,
}
