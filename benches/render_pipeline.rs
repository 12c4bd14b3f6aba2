use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_time::{Recurrence, RenderConfig, View, render};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    for recurrence in Recurrence::ALL {
        let config = RenderConfig {
            recurrence: *recurrence,
            width: 320,
            height: 180,
            max_iterations: 250,
            ..RenderConfig::default()
        };
        let viewport = View::default()
            .viewport(config.aspect_ratio)
            .expect("default view is valid");

        group.bench_with_input(
            BenchmarkId::from_parameter(recurrence),
            &config,
            |b, config| b.iter(|| render(black_box(config), viewport).expect("render succeeds")),
        );
    }

    group.finish();
}

fn bench_max_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot_max_iterations");
    group.sample_size(20);

    for max_iterations in [50, 250, 1000] {
        let config = RenderConfig {
            width: 160,
            height: 90,
            max_iterations,
            ..RenderConfig::default()
        };
        let viewport = View::default()
            .viewport(config.aspect_ratio)
            .expect("default view is valid");

        group.bench_with_input(
            BenchmarkId::from_parameter(max_iterations),
            &config,
            |b, config| b.iter(|| render(black_box(config), viewport).expect("render succeeds")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_max_iterations);
criterion_main!(benches);
