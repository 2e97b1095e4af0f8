use criterion::{Criterion, criterion_group, criterion_main};
use line_graph::api::{GraphStyle, LineGraph, LineGraphConfig};
use line_graph::core::{SeriesScale, SurfaceSize, ValueRange, project_series, sample_pointer};
use line_graph::render::NullRenderer;
use std::hint::black_box;

fn wave(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.013).sin() * 40.0 + (t * 0.17).cos() * 3.0
        })
        .collect()
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let datapoints = wave(10_000);
    let range = ValueRange::from_datapoints(&datapoints).expect("valid range");
    let scale = SeriesScale::new(range, SurfaceSize::new(1920, 400), datapoints.len());

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let _ = project_series(black_box(&datapoints), black_box(scale));
        })
    });
}

fn bench_graph_update_10k(c: &mut Criterion) {
    let config = LineGraphConfig::new(wave(10_000)).with_size(1920, 400);
    let mut graph = LineGraph::new(NullRenderer::default(), config).expect("graph init");

    c.bench_function("graph_update_10k", |b| {
        b.iter(|| {
            graph.update();
            black_box(graph.fill_path().len());
        })
    });
}

fn bench_pointer_sampling(c: &mut Criterion) {
    c.bench_function("pointer_sampling", |b| {
        b.iter(|| {
            let _ = sample_pointer(
                black_box(731.25),
                black_box(1920.0),
                black_box(0.9),
                black_box(10_000),
            );
        })
    });
}

fn bench_pointer_sweep_1k(c: &mut Criterion) {
    let style = GraphStyle {
        padding: 0.9,
        ..GraphStyle::default()
    };
    let config = LineGraphConfig::new(wave(1_000))
        .with_size(1920, 400)
        .with_style(style);
    let mut graph = LineGraph::new(NullRenderer::default(), config).expect("graph init");
    graph.set_on_value(|sample| {
        black_box(sample);
    });

    c.bench_function("pointer_sweep_1k", |b| {
        b.iter(|| {
            graph.pointer_enter(0.0);
            for step in 0..1_920 {
                graph.pointer_move(black_box(f64::from(step)));
            }
            graph.pointer_leave();
        })
    });
}

criterion_group!(
    benches,
    bench_series_projection_10k,
    bench_graph_update_10k,
    bench_pointer_sampling,
    bench_pointer_sweep_1k
);
criterion_main!(benches);
