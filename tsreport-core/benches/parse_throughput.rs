use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use tsreport_core::ingest::{parse_records, scan_directory};

/// Build a synthetic monitoring snapshot with `rows` data lines.
fn synthetic_snapshot(rows: usize) -> String {
    let mut out = String::from("DATE,DBNAME,TSNAME,GBALLOC,C4,C5,C6,C7,C8,GBFREEOFMAX\n");
    for i in 0..rows {
        out.push_str(&format!(
            "2016-03-{:02},DB{:02},TS_{:03},{},0,0,0,0,0,{}\n",
            (i % 28) + 1,
            i % 7,
            i % 97,
            i % 500,
            i % 100,
        ));
    }
    out
}

/// Benchmark: raw record parsing over an in-memory source
fn bench_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");

    for rows in [1_000, 10_000, 100_000] {
        let input = synthetic_snapshot(rows);

        group.bench_with_input(BenchmarkId::new("rows", rows), &input, |b, input| {
            b.iter(|| {
                let set = parse_records(Cursor::new(black_box(input.as_bytes())));
                black_box(set.len())
            });
        });
    }

    group.finish();
}

/// Benchmark: full directory rebuild, the cost paid by every query
fn bench_scan_directory(c: &mut Criterion) {
    c.bench_function("scan_directory_10_files", |b| {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..10 {
            fs::write(
                temp_dir.path().join(format!("host-{i}.log")),
                synthetic_snapshot(1_000),
            )
            .unwrap();
        }

        b.iter(|| {
            let set = scan_directory(black_box(temp_dir.path())).unwrap();
            black_box(set.len())
        });
    });
}

criterion_group!(benches, bench_parse_records, bench_scan_directory);
criterion_main!(benches);
