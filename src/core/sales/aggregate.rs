// Batch aggregation: compute the whole summary table from the detail rows.
//
// Purpose
// - Full-rebuild mechanism, and the oracle the incremental path must match:
//   repeated incremental application over the same detail set has to land
//   on exactly these rows.
//
// Responsibilities
// - Group by the extracted month key, sum amounts, count rows.
// - Grouping is order independent; the ascending key order of the output
//   comes from the map, not from the input sequence.

use crate::core::sales::detail::SaleDetailRow;
use crate::core::sales::month_key::{self, MonthKeyError};
use crate::core::sales::summary::MonthSummaryRow;
use std::collections::BTreeMap;

pub fn summarize(rows: &[SaleDetailRow]) -> Result<Vec<MonthSummaryRow>, MonthKeyError> {
    let mut buckets: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for row in rows {
        let key = month_key::extract(Some(row.rental_date))?;
        let bucket = buckets.entry(key).or_insert((0, 0));
        bucket.0 += row.amount_minor;
        bucket.1 += 1;
    }
    Ok(buckets
        .into_iter()
        .map(
            |(month_key, (total_revenue_minor, total_transactions))| MonthSummaryRow {
                month_key,
                total_revenue_minor,
                total_transactions,
            },
        )
        .collect())
}

#[cfg(test)]
mod sales_aggregate_tests {
    use super::*;
    use crate::test_support::fixtures::feeds::make_detail_row;
    use rstest::rstest;

    #[rstest]
    fn it_should_produce_no_rows_for_an_empty_detail_set() {
        let summary = summarize(&[]).unwrap();
        assert!(summary.is_empty());
    }

    #[rstest]
    fn it_should_create_one_bucket_for_a_single_row() {
        let rows = vec![make_detail_row(1, "2008-06-12 10:30:00", 1099)];
        let summary = summarize(&rows).unwrap();
        assert_eq!(
            summary,
            vec![MonthSummaryRow {
                month_key: "2008-06".to_string(),
                total_revenue_minor: 1099,
                total_transactions: 1,
            }]
        );
    }

    #[rstest]
    fn it_should_accumulate_rows_that_share_a_month() {
        let rows = vec![
            make_detail_row(1, "2008-06-12 10:30:00", 1099),
            make_detail_row(2, "2008-06-20 18:00:00", 500),
        ];
        let summary = summarize(&rows).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_revenue_minor, 1599);
        assert_eq!(summary[0].total_transactions, 2);
    }

    #[rstest]
    fn it_should_group_four_months_with_hand_computed_totals() {
        let rows = vec![
            make_detail_row(1, "2008-03-05 09:00:00", 299),
            make_detail_row(2, "2008-04-10 12:00:00", 499),
            make_detail_row(3, "2008-04-22 16:45:00", 999),
            make_detail_row(4, "2008-05-01 08:15:00", 1099),
            make_detail_row(5, "2008-06-12 10:30:00", 1099),
            make_detail_row(6, "2008-06-20 18:00:00", 500),
        ];
        let summary = summarize(&rows).unwrap();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary[0].month_key, "2008-03");
        assert_eq!(summary[0].total_revenue_minor, 299);
        assert_eq!(summary[0].total_transactions, 1);
        assert_eq!(summary[1].month_key, "2008-04");
        assert_eq!(summary[1].total_revenue_minor, 1498);
        assert_eq!(summary[1].total_transactions, 2);
        assert_eq!(summary[2].month_key, "2008-05");
        assert_eq!(summary[2].total_revenue_minor, 1099);
        assert_eq!(summary[2].total_transactions, 1);
        assert_eq!(summary[3].month_key, "2008-06");
        assert_eq!(summary[3].total_revenue_minor, 1599);
        assert_eq!(summary[3].total_transactions, 2);
    }

    #[rstest]
    fn it_should_not_depend_on_the_order_of_the_detail_rows() {
        let mut rows = vec![
            make_detail_row(1, "2008-06-12 10:30:00", 1099),
            make_detail_row(2, "2008-03-05 09:00:00", 299),
            make_detail_row(3, "2008-04-10 12:00:00", 499),
        ];
        let forward = summarize(&rows).unwrap();
        rows.reverse();
        let backward = summarize(&rows).unwrap();
        assert_eq!(forward, backward);
    }

    #[rstest]
    fn it_should_be_identical_on_repeated_runs_over_the_same_rows() {
        let rows = vec![
            make_detail_row(1, "2008-06-12 10:30:00", 1099),
            make_detail_row(2, "2008-07-01 00:00:00", 500),
        ];
        assert_eq!(summarize(&rows).unwrap(), summarize(&rows).unwrap());
    }
}
