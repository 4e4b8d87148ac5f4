//! Record table benchmarks: search, sort and export over a large set.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use selfcert::export::to_csv;
use selfcert::model::{fields, Record, RecordId, ADMIN_COLUMNS};
use selfcert::state::{PageSize, RecordTable, SortSpec, TableOptions};

const NUM_RECORDS: usize = 50_000;

const COUNTRIES: [&str; 6] = ["Norway", "Chile", "Kenya", "Japan", "Peru", "Austria"];
const STATUSES: [&str; 3] = ["Active", "Pending", "Expired"];

fn generate_records() -> Vec<Record> {
    (0..NUM_RECORDS)
        .map(|i| {
            Record::new(RecordId::new(format!("a0X{i:012}")).expect("valid id"))
                .with_field(fields::COUNTRY, COUNTRIES[i % COUNTRIES.len()])
                .with_field(
                    fields::CERTIFICATION_DATE,
                    format!("2024-{:02}-{:02}T10:00:00.000+0000", i % 12 + 1, i % 28 + 1),
                )
                .with_field(fields::CERTIFIED_BY_NAME, format!("Certifier {}", i % 997))
                .with_field(fields::STATUS, STATUSES[i % STATUSES.len()])
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut table = RecordTable::with_records(TableOptions::default(), generate_records());

    c.bench_function("search_50k_records", |b| {
        b.iter(|| {
            table.set_search(black_box("certifier 42"));
            black_box(table.filtered_count())
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let mut table = RecordTable::with_records(TableOptions::default(), generate_records());

    c.bench_function("sort_50k_records_by_date", |b| {
        b.iter(|| {
            table.sort_by(black_box(SortSpec::descending(fields::CERTIFICATION_DATE)));
            black_box(table.visible().len())
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let options = TableOptions {
        page_size: PageSize::All,
        ..TableOptions::default()
    };
    let table = RecordTable::with_records(options, generate_records());
    let rows = table.visible();

    c.bench_function("csv_50k_records", |b| {
        b.iter(|| black_box(to_csv(&rows, &ADMIN_COLUMNS)))
    });
}

criterion_group!(benches, bench_search, bench_sort, bench_export);
criterion_main!(benches);
