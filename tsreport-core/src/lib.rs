//! tsreport core - tablespace snapshot ingestion and query engine
//!
//! Builds an in-memory record set from a directory of delimited snapshot
//! files and answers aggregation queries against it.
//!
//! # Architecture
//!
//! Data flows through two pure stages:
//!
//! - **Ingest**: walk the snapshot root, parse each file leniently (bad
//!   lines are dropped and counted, never fatal), and concatenate
//!   everything into one [`ingest::RecordSet`]
//! - **Query**: filter/group/sum primitives plus the façade views that
//!   the HTTP and CLI adapters serialize
//!
//! The record set is rebuilt on every top-level query: there is no cache
//! and no shared state, so concurrent callers are isolated by
//! construction and staleness is bounded by disk contents at scan time.

pub mod ingest;
pub mod query;

mod error;
mod types;

pub use error::{ReportError, Result};
pub use types::TablespaceRecord;

/// tsreport version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
