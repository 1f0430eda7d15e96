//! Snapshot ingestion
//!
//! One ingestion pass walks a snapshot root, parses every eligible file,
//! and concatenates the rows into a single in-memory [`RecordSet`]. The
//! set lives for the duration of one query cycle only; nothing is cached
//! between passes.

mod parser;
mod scan;

pub use parser::{parse_path, parse_records};
pub use scan::scan_directory;

use serde::Serialize;

use crate::TablespaceRecord;

/// Fixed column positions within a snapshot row.
pub const COL_DATE: usize = 0;
/// Database name column; also where the repeated-header sentinel shows up.
pub const COL_DATABASE: usize = 1;
pub const COL_TABLESPACE: usize = 2;
pub const COL_ALLOCATED_GB: usize = 3;
pub const COL_FREE_PERCENT: usize = 9;

/// Minimum field count a row needs to populate every column above.
pub const MIN_FIELDS: usize = 10;

/// Literal in the database-name column marking a repeated column-header
/// row. Concatenated exports re-emit their header mid-file; such rows
/// are dropped, not parsed.
pub const HEADER_SENTINEL: &str = "DBNAME";

/// Everything one ingestion pass produced.
#[derive(Debug, Default)]
pub struct RecordSet {
    /// Parsed rows in file-then-line order.
    pub records: Vec<TablespaceRecord>,
    /// Diagnostics accumulated while parsing.
    pub stats: IngestStats,
}

impl RecordSet {
    /// Append another fragment (one file's output), preserving order.
    pub fn merge(&mut self, other: RecordSet) {
        self.records.extend(other.records);
        self.stats.merge(&other.stats);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ingestion diagnostics.
///
/// Lenient parsing absorbs two kinds of problems instead of failing the
/// pass: structurally malformed lines are dropped, and numeric fields
/// that do not convert fall back to zero. Both are counted here so a
/// zero produced by defaulting stays distinguishable from a genuine
/// zero in the source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Snapshot files parsed.
    pub files: usize,
    /// Lines dropped for structural reasons (wrong field count).
    pub malformed_lines: usize,
    /// Numeric fields recorded as zero because conversion failed.
    pub defaulted_fields: usize,
}

impl IngestStats {
    pub fn merge(&mut self, other: &IngestStats) {
        self.files += other.files;
        self.malformed_lines += other.malformed_lines;
        self.defaulted_fields += other.defaulted_fields;
    }
}
