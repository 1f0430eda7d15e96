//! Report pages embedded at compile time, so the binary deploys alone.

/// Database size report
pub const DBLIST: &str = include_str!("../assets/dblist.html");

/// Tablespace listing report
pub const TSLIST: &str = include_str!("../assets/tslist.html");

/// Allocation history chart
pub const CHART: &str = include_str!("../assets/chart.html");
