//! Aggregation primitives

use std::collections::HashMap;

use crate::TablespaceRecord;

/// Count rows per database name.
///
/// Iteration order of the result carries no meaning.
pub fn database_counts(records: &[TablespaceRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.database.clone()).or_insert(0) += 1;
    }
    counts
}

/// Keep rows whose database name matches exactly, preserving order.
pub fn filter_by_database(records: &[TablespaceRecord], name: &str) -> Vec<TablespaceRecord> {
    records
        .iter()
        .filter(|r| r.database == name)
        .cloned()
        .collect()
}

/// Keep rows whose tablespace name matches exactly, preserving order.
pub fn filter_by_tablespace(records: &[TablespaceRecord], name: &str) -> Vec<TablespaceRecord> {
    records
        .iter()
        .filter(|r| r.tablespace == name)
        .cloned()
        .collect()
}

/// Keep rows whose capture date matches exactly, preserving order.
///
/// Dates are opaque strings; this is string equality, not calendar
/// comparison.
pub fn filter_by_date(records: &[TablespaceRecord], date: &str) -> Vec<TablespaceRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}

/// Sum of allocated gigabytes across the rows. Empty input sums to zero.
pub fn total_allocated_gb(records: &[TablespaceRecord]) -> i64 {
    records.iter().map(|r| r.allocated_gb).sum()
}

/// The newest capture date present, by lexicographic comparison.
///
/// The upstream date format is fixed-width (`YYYY-MM-DD`), so string
/// order and calendar order agree.
pub fn latest_date(records: &[TablespaceRecord]) -> Option<&str> {
    records.iter().map(|r| r.date.as_str()).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(database: &str, tablespace: &str, date: &str, allocated_gb: i64) -> TablespaceRecord {
        TablespaceRecord {
            database: database.to_string(),
            tablespace: tablespace.to_string(),
            free_percent_of_max: 0,
            date: date.to_string(),
            allocated_gb,
        }
    }

    fn fixture() -> Vec<TablespaceRecord> {
        vec![
            record("FS", "I_USR", "2016-03-17", 10),
            record("FS", "D_USR", "2016-03-17", 20),
            record("CFTWORK", "I_USR", "2016-03-16", 7),
            record("FS", "I_USR", "2016-03-18", 11),
        ]
    }

    #[test]
    fn test_database_counts() {
        let counts = database_counts(&fixture());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["FS"], 3);
        assert_eq!(counts["CFTWORK"], 1);
    }

    #[test]
    fn test_filters_are_exact_and_order_preserving() {
        let records = fixture();

        let fs = filter_by_database(&records, "FS");
        assert_eq!(fs.len(), 3);
        let tablespaces: Vec<&str> = fs.iter().map(|r| r.tablespace.as_str()).collect();
        assert_eq!(tablespaces, ["I_USR", "D_USR", "I_USR"]);

        // Case-sensitive: no normalization happens anywhere.
        assert!(filter_by_database(&records, "fs").is_empty());

        assert_eq!(filter_by_tablespace(&records, "I_USR").len(), 3);
        assert_eq!(filter_by_date(&records, "2016-03-17").len(), 2);
    }

    #[test]
    fn test_filter_by_database_is_idempotent() {
        let records = fixture();
        let once = filter_by_database(&records, "FS");
        let twice = filter_by_database(&once, "FS");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_allocated_gb() {
        assert_eq!(total_allocated_gb(&[]), 0);
        assert_eq!(total_allocated_gb(&fixture()), 48);
    }

    #[test]
    fn test_total_is_associative_under_concatenation() {
        let records = fixture();
        let (a, b) = records.split_at(2);
        assert_eq!(
            total_allocated_gb(&records),
            total_allocated_gb(a) + total_allocated_gb(b)
        );
    }

    #[test]
    fn test_latest_date() {
        assert_eq!(latest_date(&fixture()), Some("2016-03-18"));
        assert_eq!(latest_date(&[]), None);
    }
}
