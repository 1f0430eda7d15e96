//! File collector
//!
//! Walks the snapshot root and feeds every eligible file to the record
//! parser, concatenating results in deterministic traversal order.

use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::{parse_path, RecordSet};
use crate::Result;

/// Walk `root` and parse every eligible snapshot file into one record set.
///
/// Traversal is lexical by file name, so concatenation order (and with
/// it chart series order) is stable across runs. Hidden files and
/// directories are pruned; directories themselves are never parsed. A
/// traversal error or an unopenable file aborts the whole pass;
/// malformed content inside a file does not.
pub fn scan_directory(root: &Path) -> Result<RecordSet> {
    let mut set = RecordSet::default();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let file_set = parse_path(entry.path())?;
        debug!(
            "{}: {} records, {} malformed lines",
            entry.path().display(),
            file_set.len(),
            file_set.stats.malformed_lines
        );
        set.merge(file_set);
    }

    info!(
        "ingested {} records from {} files under {}",
        set.len(),
        set.stats.files,
        root.display()
    );
    Ok(set)
}

// Hidden entries (.DS_Store and friends) are filesystem noise, never
// snapshot data. The depth-0 exemption keeps a hidden-looking root
// path itself walkable.
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
