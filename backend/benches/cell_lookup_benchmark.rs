use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sales_viz::models::{HeatmapCell, HeatmapSnapshot, ViewMode};
use sales_viz::services::{build_sales_heatmap, find_cell, CellIndex};
use std::hint::black_box;

fn create_snapshot(categories: usize, periods: usize) -> HeatmapSnapshot {
    let category_labels: Vec<String> = (0..categories).map(|c| format!("Product {}", c)).collect();
    let period_labels: Vec<String> = (0..periods).map(|p| format!("Month {}", p)).collect();

    // Every other pair has sales.
    let cells = category_labels
        .iter()
        .flat_map(|category| {
            period_labels.iter().map(move |period| (period.clone(), category.clone()))
        })
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(i, (period, category))| {
            HeatmapCell::new(period, category, i as f64, i as f64 * 10.0, (i % 10) as f64 / 10.0)
        })
        .collect();

    HeatmapSnapshot::new(cells, category_labels, period_labels)
}

fn bench_cell_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_lookup");

    for categories in [10usize, 50, 200] {
        let snapshot = create_snapshot(categories, 12);

        group.bench_with_input(BenchmarkId::new("scan", categories), &snapshot, |b, s| {
            b.iter(|| {
                for category in &s.categories {
                    for period in &s.periods {
                        black_box(find_cell(&s.cells, period, category));
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed", categories), &snapshot, |b, s| {
            b.iter(|| {
                let index = CellIndex::build(&s.cells);
                for category in &s.categories {
                    for period in &s.periods {
                        black_box(index.get(period, category));
                    }
                }
            });
        });
    }

    group.finish();
}

fn bench_build_heatmap(c: &mut Criterion) {
    let snapshot = create_snapshot(50, 12);

    c.bench_function("build_sales_heatmap", |b| {
        b.iter(|| black_box(build_sales_heatmap(black_box(&snapshot), ViewMode::Quantity, 64)));
    });
}

criterion_group!(benches, bench_cell_lookup, bench_build_heatmap);
criterion_main!(benches);
