//! Command-line inspection over the tablespace usage pipeline

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tsreport_core::ingest::{scan_directory, RecordSet};
use tsreport_core::query::{
    chart_series, database_counts, latest_date, listing, size_per_database,
};

#[derive(Parser)]
#[command(name = "tsreport-cli")]
#[command(about = "Inspect tablespace usage snapshot logs")]
#[command(version)]
struct Cli {
    /// Root directory the monitoring jobs drop their log files into
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List snapshot records
    Records(RecordsArgs),

    /// List databases with their snapshot row counts
    Dblist(DblistArgs),

    /// Report allocated GB per database on one date
    Dbsize(DbsizeArgs),

    /// Print the allocation series for one tablespace
    Chart(ChartArgs),

    /// Show ingestion diagnostics for the data directory
    Stats(StatsArgs),
}

#[derive(Parser)]
struct RecordsArgs {
    /// Keep only rows with this snapshot date
    #[arg(long)]
    date: Option<String>,

    /// Keep only rows of this database
    #[arg(long)]
    database: Option<String>,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct DblistArgs {
    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct DbsizeArgs {
    /// Date to report on (defaults to the newest snapshot date)
    #[arg(long)]
    date: Option<String>,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct ChartArgs {
    /// Database the series belongs to
    #[arg(long, default_value = "CFTWORK")]
    database: String,

    /// Tablespace to chart
    #[arg(long, default_value = "I_USR")]
    tablespace: String,

    /// Output as JSON instead of plain values
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct StatsArgs {
    /// Output as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let set = scan_directory(&cli.data_dir)
        .with_context(|| format!("scanning {}", cli.data_dir.display()))?;

    match cli.command {
        Command::Records(args) => print_records(&set, &args),
        Command::Dblist(args) => print_dblist(&set, &args),
        Command::Dbsize(args) => print_dbsize(&set, &args),
        Command::Chart(args) => print_chart(&set, &args),
        Command::Stats(args) => print_stats(&set, &args),
    }
}

fn print_records(set: &RecordSet, args: &RecordsArgs) -> anyhow::Result<()> {
    let rows = listing(&set.records, args.date.as_deref(), args.database.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<14} {:<20} {:>10} {:>14}",
        "Date", "Database", "Tablespace", "Alloc (GB)", "Free % of max"
    );
    println!("{}", "-".repeat(74));
    for row in &rows {
        println!(
            "{:<12} {:<14} {:<20} {:>10} {:>14}",
            row.date, row.database, row.tablespace, row.allocated_gb, row.free_percent_of_max
        );
    }
    Ok(())
}

fn print_dblist(set: &RecordSet, args: &DblistArgs) -> anyhow::Result<()> {
    let counts: BTreeMap<String, usize> = database_counts(&set.records).into_iter().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{:<16} {:>8}", "Database", "Rows");
    println!("{}", "-".repeat(25));
    for (database, rows) in &counts {
        println!("{:<16} {:>8}", database, rows);
    }
    Ok(())
}

fn print_dbsize(set: &RecordSet, args: &DbsizeArgs) -> anyhow::Result<()> {
    let as_of = args
        .date
        .clone()
        .or_else(|| latest_date(&set.records).map(str::to_string))
        .unwrap_or_default();
    let sizes: BTreeMap<String, i64> = size_per_database(&set.records, &as_of)
        .into_iter()
        .collect();

    if args.json {
        let report = serde_json::json!({ "date": as_of, "sizes": sizes });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Allocated GB per database on {}", as_of);
    println!("{:<16} {:>10}", "Database", "Size (GB)");
    println!("{}", "-".repeat(27));
    for (database, size) in &sizes {
        println!("{:<16} {:>10}", database, size);
    }
    Ok(())
}

fn print_chart(set: &RecordSet, args: &ChartArgs) -> anyhow::Result<()> {
    let series = chart_series(&set.records, &args.database, &args.tablespace);

    if args.json {
        println!("{}", serde_json::to_string(&series)?);
        return Ok(());
    }

    let values: Vec<String> = series.iter().map(i64::to_string).collect();
    println!("{}", values.join(" "));
    Ok(())
}

fn print_stats(set: &RecordSet, args: &StatsArgs) -> anyhow::Result<()> {
    if args.json {
        let report = serde_json::json!({ "records": set.len(), "stats": set.stats });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("files:            {}", set.stats.files);
    println!("records:          {}", set.len());
    println!("malformed lines:  {}", set.stats.malformed_lines);
    println!("defaulted fields: {}", set.stats.defaulted_fields);
    Ok(())
}
