//! End-to-end pipeline tests: scan a realistic monitoring drop directory,
//! then answer report queries over the ingested records.

use std::fs;

use tempfile::TempDir;
use tsreport_core::ingest::scan_directory;
use tsreport_core::query::{chart_series, latest_date, listing, size_per_database};

/// Lay out a drop directory the way the monitoring jobs leave it: one log
/// per database host, an Oracle error banner wedged into one of them, a
/// Finder dropping, and an archived log one level down.
fn write_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();

    fs::write(
        dir.path().join("cftwork.log"),
        "DATE,DBNAME,TSNAME,GBALLOC,C4,C5,C6,C7,C8,GBFREEOFMAX\n\
         2016-03-15,CFTWORK,I_USR,5,0,0,0,0,0,50\n\
         2016-03-15,CFTWORK,D_USR,40,0,0,0,0,0,20\n\
         ERROR:\n\
         ORA-00257: archiver error. Connect internal only, until freed.\n\
         2016-03-16,CFTWORK,I_USR,6,0,0,0,0,0,48\n\
         2016-03-17,CFTWORK,I_USR,7,0,0,0,0,0,45\n\
         2016-03-17,CFTWORK,D_USR,41,0,0,0,0,0,19\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("fs.log"),
        "DATE,DBNAME,TSNAME,GBALLOC,C4,C5,C6,C7,C8,GBFREEOFMAX\n\
         2016-03-17,FS,I_USR,10,0,0,0,0,0,5\n\
         2016-03-17,FS,D_USR,20,0,0,0,0,0,9\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("other.log"),
        "DATE,DBNAME,TSNAME,GBALLOC,C4,C5,C6,C7,C8,GBFREEOFMAX\n\
         2016-03-10,OTHER,SYSTEM,99,0,0,0,0,0,1\n\
         2016-03-10,OTHER,TEMP,n/a,0,0,0,0,0,3\n",
    )
    .unwrap();

    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(
        dir.path().join("nested").join("archive.log"),
        "2016-03-10,ARCH,SYSTEM,3,0,0,0,0,0,7\n",
    )
    .unwrap();

    // Hidden junk must never reach the parser.
    fs::write(dir.path().join(".DS_Store"), "\x00\x01bud1,garbage\n").unwrap();

    dir
}

#[test]
fn scan_builds_complete_record_set() {
    let dir = write_fixture();
    let set = scan_directory(dir.path()).unwrap();

    assert_eq!(set.len(), 10);
    assert_eq!(set.stats.files, 4);
    assert_eq!(set.stats.malformed_lines, 2);
    assert_eq!(set.stats.defaulted_fields, 1);

    // The hidden file contributed nothing, not even malformed-line counts.
    assert!(set.records.iter().all(|r| r.database != "bud1"));
}

#[test]
fn usage_views_answer_report_queries() {
    let dir = write_fixture();
    let set = scan_directory(dir.path()).unwrap();

    assert_eq!(latest_date(&set.records), Some("2016-03-17"));

    let sizes = size_per_database(&set.records, "2016-03-17");
    assert_eq!(sizes.len(), 4);
    assert_eq!(sizes["CFTWORK"], 48);
    assert_eq!(sizes["FS"], 30);
    // Databases with no snapshot on that date still appear, at zero.
    assert_eq!(sizes["OTHER"], 0);
    assert_eq!(sizes["ARCH"], 0);

    assert_eq!(listing(&set.records, None, Some("CFTWORK")).len(), 5);
    assert_eq!(
        listing(&set.records, Some("2016-03-15"), Some("CFTWORK")).len(),
        2
    );
    assert_eq!(listing(&set.records, None, None).len(), 10);
}

#[test]
fn chart_series_follows_scan_order() {
    let dir = write_fixture();
    let set = scan_directory(dir.path()).unwrap();

    // Files are visited in name order and rows in file order, so the
    // CFTWORK I_USR history comes out oldest first here.
    assert_eq!(chart_series(&set.records, "CFTWORK", "I_USR"), vec![5, 6, 7]);
    assert!(chart_series(&set.records, "CFTWORK", "NO_SUCH_TS").is_empty());
}
