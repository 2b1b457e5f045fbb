use std::cmp::Reverse;

use crate::models::ProductRecord;

/// Order records by rating count, most rated first.
///
/// Display priority only: a listing with no rating count is treated exactly
/// like one with zero ratings. The sort is stable, so ties keep their input
/// order.
pub fn rank_by_ratings(mut records: Vec<ProductRecord>) -> Vec<ProductRecord> {
    records.sort_by_key(|record| Reverse(record.num_ratings.unwrap_or(0)));
    records
}
