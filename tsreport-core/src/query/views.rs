//! Query views
//!
//! The stable surface the HTTP and CLI adapters consume. Every view is
//! a composition of the primitives in [`super::aggregates`].

use std::collections::HashMap;

use super::aggregates::{
    database_counts, filter_by_database, filter_by_date, filter_by_tablespace,
    total_allocated_gb,
};
use crate::TablespaceRecord;

/// Total allocation per database as of one capture date.
///
/// Every database present anywhere in `records` appears in the result;
/// a database with no rows on `as_of_date` reports zero rather than
/// being absent.
pub fn size_per_database(records: &[TablespaceRecord], as_of_date: &str) -> HashMap<String, i64> {
    let mut sizes = HashMap::new();
    for database in database_counts(records).into_keys() {
        let rows = filter_by_database(records, &database);
        let rows = filter_by_date(&rows, as_of_date);
        sizes.insert(database, total_allocated_gb(&rows));
    }
    sizes
}

/// Rows matching the optional date and database selectors.
///
/// With neither selector present this is the full record set.
pub fn listing(
    records: &[TablespaceRecord],
    date: Option<&str>,
    database: Option<&str>,
) -> Vec<TablespaceRecord> {
    let mut rows = records.to_vec();
    if let Some(date) = date {
        rows = filter_by_date(&rows, date);
    }
    if let Some(database) = database {
        rows = filter_by_database(&rows, database);
    }
    rows
}

/// Allocation history for one tablespace of one database.
///
/// Values appear in ingestion (file-then-line) order, not sorted by
/// capture date. With one lexically named snapshot file per day the two
/// orders coincide, but this function does not enforce that.
pub fn chart_series(records: &[TablespaceRecord], database: &str, tablespace: &str) -> Vec<i64> {
    let rows = filter_by_database(records, database);
    let rows = filter_by_tablespace(&rows, tablespace);
    rows.iter().map(|r| r.allocated_gb).collect()
}
