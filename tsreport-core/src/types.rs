//! Core types for tsreport

use serde::{Deserialize, Serialize};

/// One tablespace usage snapshot row.
///
/// A record is immutable once constructed: ingestion builds it from one
/// source line and nothing mutates it afterwards. On the wire it
/// serializes with the field names the report pages consume (`dbname`,
/// `tsname`, `gbfreeofmax`, `Date`, `gballoc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablespaceRecord {
    /// Owning database instance.
    #[serde(rename = "dbname")]
    pub database: String,
    /// Tablespace within the database.
    #[serde(rename = "tsname")]
    pub tablespace: String,
    /// Percentage of the maximum configured size still free. Zero when
    /// the source field did not parse.
    #[serde(rename = "gbfreeofmax")]
    pub free_percent_of_max: i64,
    /// Capture date as produced upstream. An opaque, lexicographically
    /// comparable string; never parsed into a calendar type.
    #[serde(rename = "Date")]
    pub date: String,
    /// Gigabytes allocated. Zero when the source field did not parse.
    #[serde(rename = "gballoc")]
    pub allocated_gb: i64,
}
