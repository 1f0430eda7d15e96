//! Record parser for snapshot files
//!
//! Sources are comma-separated with optionally quoted fields, at least
//! ten columns wide. Real exports are messy: they interleave structured
//! rows with free-text error banners (`ORA-00257: archiver error. ...`),
//! re-emit their column header mid-file, and sometimes carry numeric
//! fields that do not convert. The contract here is resilience: one bad
//! line never aborts ingestion of the remaining file.
//!
//! Row arity is pinned by the first row of each source: a row whose
//! field count disagrees with it (banner text, or a field-internal
//! delimiter shifting the columns) is rejected as one malformed-line
//! event and parsing continues with the next line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use super::{
    IngestStats, RecordSet, COL_ALLOCATED_GB, COL_DATABASE, COL_DATE, COL_FREE_PERCENT,
    COL_TABLESPACE, HEADER_SENTINEL, MIN_FIELDS,
};
use crate::{Result, TablespaceRecord};

/// Parse every record from an already-open source, in line order.
///
/// Malformed lines are warned about, counted, and skipped. Numeric
/// fields that fail to convert are recorded as zero and counted. An I/O
/// failure mid-source stops that source, keeping the rows accumulated
/// so far.
pub fn parse_records<R: Read>(source: R) -> RecordSet {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(source);

    let mut set = RecordSet::default();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => {
                warn!("read failed, keeping {} rows parsed so far: {}", set.len(), e);
                break;
            }
            Err(e) => {
                warn!("skipping malformed line: {}", e);
                set.stats.malformed_lines += 1;
                continue;
            }
        };

        if row.len() < MIN_FIELDS {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            warn!(
                "skipping malformed line {}: {} fields, need at least {}",
                line,
                row.len(),
                MIN_FIELDS
            );
            set.stats.malformed_lines += 1;
            continue;
        }

        // Repeated column-header rows from concatenated exports.
        let database = field(&row, COL_DATABASE);
        if database == HEADER_SENTINEL {
            continue;
        }

        let free_percent_of_max = lenient_i64(&row, COL_FREE_PERCENT, &mut set.stats);
        let allocated_gb = lenient_i64(&row, COL_ALLOCATED_GB, &mut set.stats);

        set.records.push(TablespaceRecord {
            database: database.to_string(),
            tablespace: field(&row, COL_TABLESPACE).to_string(),
            free_percent_of_max,
            date: field(&row, COL_DATE).to_string(),
            allocated_gb,
        });
    }

    set
}

/// Parse one snapshot file, owning open and close.
///
/// An open failure is an error: during directory-driven ingestion a
/// file that cannot be opened aborts the whole pass, there is no
/// partial-file result. Content problems inside the file stay lenient
/// as in [`parse_records`].
pub fn parse_path(path: &Path) -> Result<RecordSet> {
    let file = File::open(path)?;
    let mut set = parse_records(file);
    set.stats.files = 1;
    Ok(set)
}

fn field<'a>(row: &'a csv::StringRecord, col: usize) -> &'a str {
    row.get(col).map(str::trim).unwrap_or("")
}

// Lenient numeric conversion: favor row retention over precision. The
// fallback zero is counted so it stays distinguishable from a real zero.
fn lenient_i64(row: &csv::StringRecord, col: usize, stats: &mut IngestStats) -> i64 {
    let raw = field(row, col);
    match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("column {} value {:?} is not numeric, recording zero", col, raw);
            stats.defaulted_fields += 1;
            0
        }
    }
}
