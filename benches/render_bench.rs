//! Benchmarks for simple_table rendering and transpose.

use criterion::{Criterion, criterion_group, criterion_main};
use simple_table::cells::cell_len;
use simple_table::prelude::*;
use std::hint::black_box;

fn numeric_table(columns: usize, rows: usize) -> Table {
    Table::new((0..columns).map(|c| (0..rows).map(move |r| c * rows + r)))
}

fn benchmark_cell_len(c: &mut Criterion) {
    c.bench_function("cell_len_ascii", |b| {
        b.iter(|| black_box(cell_len("Prog. language")));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let small = numeric_table(4, 8).header(["a", "b", "c", "d"]).title("Small");
    c.bench_function("render_4x8", |b| {
        b.iter(|| black_box(small.render()));
    });

    let large = numeric_table(20, 500);
    c.bench_function("render_20x500_auto_width", |b| {
        b.iter(|| black_box(large.render()));
    });

    let fixed = numeric_table(20, 500).column_width(8);
    c.bench_function("render_20x500_fixed_width", |b| {
        b.iter(|| black_box(fixed.render()));
    });
}

fn benchmark_transpose(c: &mut Criterion) {
    let table = numeric_table(20, 500).header((0..20).map(|i| format!("h{i}")));
    c.bench_function("transpose_20x500_with_header", |b| {
        b.iter(|| {
            let mut table = table.clone();
            table.transpose();
            black_box(table)
        });
    });
}

criterion_group!(benches, benchmark_cell_len, benchmark_render, benchmark_transpose);
criterion_main!(benches);
