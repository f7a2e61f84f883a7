//! Benchmarks for screen composition and text rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use trendwave::composer::{compose, RenderOptions};
use trendwave::dataset::{export_slice, DatasetSlice, ExportFormat, MetricDataset};
use trendwave::navigation::Section;
use trendwave::shell::Shell;
use trendwave::view::{to_json, TextRenderer};

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let data = MetricDataset::mock();

    for options in [RenderOptions::default(), RenderOptions::static_only()] {
        let name = if options.animations { "animated" } else { "static" };
        group.bench_function(format!("overview_{}", name), |b| {
            b.iter(|| compose(black_box(Section::Overview), &data, &options))
        });
    }

    group.bench_function("placeholder", |b| {
        b.iter(|| compose(black_box(Section::Predictions), &data, &RenderOptions::default()))
    });

    group.throughput(Throughput::Elements(Section::all().len() as u64));
    group.bench_function("all_sections", |b| {
        b.iter(|| {
            for section in Section::all() {
                black_box(compose(*section, &data, &RenderOptions::default()));
            }
        })
    });

    group.finish();
}

fn bench_shell(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell");
    let shell = Shell::default();

    group.bench_function("render", |b| b.iter(|| black_box(&shell).render()));

    group.bench_function("click_cycle", |b| {
        b.iter(|| {
            let mut shell = Shell::default();
            for section in Section::all() {
                shell.click(section.label()).unwrap();
            }
            shell
        })
    });

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let tree = Shell::default().render();
    let renderer = TextRenderer::default();
    let data = MetricDataset::mock();

    group.bench_function("render_text", |b| b.iter(|| renderer.render(black_box(&tree))));
    group.bench_function("to_json", |b| b.iter(|| to_json(black_box(&tree)).unwrap()));
    group.bench_function("export_csv_growth", |b| {
        b.iter(|| export_slice(black_box(&data), DatasetSlice::Growth, ExportFormat::Csv).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_shell, bench_output);
criterion_main!(benches);
